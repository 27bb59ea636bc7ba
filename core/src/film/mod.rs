//! Film

use crate::common::*;
use crate::element::*;
use crate::presets::*;
use crate::settings::*;
use itertools::Itertools;

bitflags! {
    /// Extra channels written by the multichannel integrator.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Channels: u32 {
        const POSITION = 1 << 0;
        const REL_POSITION = 1 << 1;
        const DISTANCE = 1 << 2;
        const GEO_NORMAL = 1 << 3;
        const SH_NORMAL = 1 << 4;
        const UV = 1 << 5;
        const ALBEDO = 1 << 6;
        const SHAPE_INDEX = 1 << 7;
        const PRIM_INDEX = 1 << 8;
    }
}

/// Channel, toggle setting, field name and pixel format in output order.
const CHANNEL_TABLE: [(Channels, &str, &str, &str); 9] = [
    (Channels::POSITION, "multichannelPosition", "position", "rgb"),
    (Channels::REL_POSITION, "multichannelRelPosition", "relPosition", "rgb"),
    (Channels::DISTANCE, "multichannelDistance", "distance", "luminance"),
    (Channels::GEO_NORMAL, "multichannelGeoNormal", "geoNormal", "rgb"),
    (Channels::SH_NORMAL, "multichannelShNormal", "shNormal", "rgb"),
    (Channels::UV, "multichannelUV", "uv", "rgb"),
    (Channels::ALBEDO, "multichannelAlbedo", "albedo", "rgb"),
    (Channels::SHAPE_INDEX, "multichannelShapeIndex", "shapeIndex", "luminance"),
    (Channels::PRIM_INDEX, "multichannelPrimIndex", "primIndex", "luminance"),
];

/// Pixel format and channel name of the base image.
const BASE_CHANNEL: &str = "rgba";

impl Channels {
    /// Returns the channels selected by the render settings. Empty when
    /// multichannel output is off.
    ///
    /// * `settings` - Render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        if !settings.find_one_bool("multichannel", false) {
            return Self::empty();
        }
        CHANNEL_TABLE
            .iter()
            .filter(|(_, toggle, _, _)| settings.find_one_bool(toggle, false))
            .fold(Self::empty(), |acc, (c, _, _, _)| acc | *c)
    }

    /// Returns the field names of the selected channels in output order.
    pub fn fields(&self) -> Vec<&'static str> {
        CHANNEL_TABLE
            .iter()
            .filter(|(c, _, _, _)| self.contains(*c))
            .map(|(_, _, field, _)| *field)
            .collect()
    }

    /// Returns the film `pixelFormat` list: the base image followed by one
    /// entry per selected channel.
    pub fn pixel_formats(&self) -> String {
        std::iter::once(BASE_CHANNEL)
            .chain(
                CHANNEL_TABLE
                    .iter()
                    .filter(|(c, _, _, _)| self.contains(*c))
                    .map(|(_, _, _, format)| *format),
            )
            .join(", ")
    }

    /// Returns the film `channelNames` list matching `pixel_formats`.
    pub fn channel_names(&self) -> String {
        std::iter::once(BASE_CHANNEL)
            .chain(self.fields())
            .join(", ")
    }
}

/// Film plugins.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilmKind {
    Hdr,
    HdrTiled,
    Ldr,
    Math,
}

impl FilmKind {
    /// Returns the film selected by the render settings. Unknown names fall
    /// back to `hdrfilm`.
    ///
    /// * `settings` - Render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let name = settings.find_one_string("film", "HDR Film");
        match name.as_str() {
            "HDR Film" => Self::Hdr,
            "Tiled HDR Film" => Self::HdrTiled,
            "LDR Film" => Self::Ldr,
            "Math Film" => Self::Math,
            _ => {
                warn!("Unknown film '{name}'; using 'HDR Film'");
                Self::Hdr
            }
        }
    }

    /// Returns the plugin name.
    pub fn plugin(&self) -> &'static str {
        match self {
            Self::Hdr => "hdrfilm",
            Self::HdrTiled => "tiledhdrfilm",
            Self::Ldr => "ldrfilm",
            Self::Math => "mfilm",
        }
    }

    /// Returns the accepted file formats; the first is the default.
    pub fn file_formats(&self) -> &'static [&'static str] {
        match self {
            Self::Hdr => &["openexr", "rgbe", "pfm"],
            Self::HdrTiled => &["openexr"],
            Self::Ldr => &["png", "jpeg"],
            Self::Math => &["matlab", "mathematica", "numpy"],
        }
    }

    /// Returns the accepted pixel formats; the first is the default.
    pub fn pixel_formats(&self) -> &'static [&'static str] {
        match self {
            Self::Hdr | Self::HdrTiled => &[
                "rgb",
                "rgba",
                "luminance",
                "luminanceAlpha",
                "xyz",
                "xyza",
                "spectrum",
                "spectrumAlpha",
            ],
            Self::Ldr => &["rgb", "rgba", "luminance", "luminanceAlpha"],
            Self::Math => &["luminance", "rgb", "spectrum"],
        }
    }

    /// Returns the accepted component formats; the first is the default.
    pub fn component_formats(&self) -> &'static [&'static str] {
        match self {
            Self::Hdr | Self::HdrTiled => &["float16", "float32", "uint32"],
            Self::Ldr | Self::Math => &[],
        }
    }

    /// Returns true if the film can store multichannel output.
    pub fn supports_multichannel(&self) -> bool {
        matches!(self, Self::Hdr | Self::HdrTiled)
    }
}

lazy_static! {
    /// Film file formats.
    pub static ref FILE_FORMAT_PRESETS: PresetMap = PresetMap::new(
        "file format",
        "openexr",
        &[
            ("OpenEXR (.exr)", "openexr"),
            ("RGBE (.hdr)", "rgbe"),
            ("PFM (.pfm)", "pfm"),
            ("PNG (.png)", "png"),
            ("JPEG (.jpg)", "jpeg"),
            ("Matlab (.m)", "matlab"),
            ("Mathematica (.cdf)", "mathematica"),
            ("NumPy (.npy)", "numpy"),
        ],
    );

    /// Film pixel formats.
    pub static ref PIXEL_FORMAT_PRESETS: PresetMap = PresetMap::new(
        "pixel format",
        "rgb",
        &[
            ("Luminance", "luminance"),
            ("Luminance Alpha", "luminanceAlpha"),
            ("RGB", "rgb"),
            ("RGBA", "rgba"),
            ("XYZ", "xyz"),
            ("XYZA", "xyza"),
            ("Spectrum", "spectrum"),
            ("Spectrum Alpha", "spectrumAlpha"),
        ],
    );

    /// Film component formats.
    pub static ref COMPONENT_FORMAT_PRESETS: PresetMap = PresetMap::new(
        "component format",
        "float16",
        &[
            ("Float 16", "float16"),
            ("Float 32", "float32"),
            ("UInt 32", "uint32"),
        ],
    );

    /// LDR tonemapping methods.
    pub static ref TONEMAP_PRESETS: PresetMap = PresetMap::new(
        "tonemap method",
        "gamma",
        &[("Gamma", "gamma"), ("Reinhard", "reinhard")],
    );
}

/// Resolves a film setting and checks it against the formats the film
/// accepts. Returns `None` when the film has no such setting.
fn film_preset(
    settings: &RenderSettings,
    attr: &str,
    presets: &PresetMap,
    accepted: &[&'static str],
    film: FilmKind,
) -> Option<&'static str> {
    let default = *accepted.first()?;
    let label = settings.find_one_string(attr, "");
    if label.is_empty() {
        return Some(default);
    }
    match presets.get(&label) {
        Some(p) if accepted.contains(&p) => Some(p),
        _ => {
            warn!(
                "{} does not support {attr} '{label}'; using '{default}'",
                film.plugin()
            );
            Some(default)
        }
    }
}

/// The film configuration, fully resolved before any element is built.
#[derive(Clone, Debug, PartialEq)]
pub struct FilmSpec {
    /// Film plugin.
    pub kind: FilmKind,

    /// File format. `None` for films without the setting.
    pub file_format: Option<&'static str>,

    /// Pixel format; a list when multichannel output is on.
    pub pixel_format: String,

    /// Channel names for multichannel output.
    pub channel_names: Option<String>,

    /// Component format. `None` for films without the setting.
    pub component_format: Option<&'static str>,
}

impl FilmSpec {
    /// Resolves the film from the render settings.
    ///
    /// * `settings` - Render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let kind = FilmKind::from_settings(settings);
        let mut file_format = match kind {
            FilmKind::HdrTiled => None,
            _ => film_preset(
                settings,
                "fileFormat",
                &FILE_FORMAT_PRESETS,
                kind.file_formats(),
                kind,
            ),
        };
        let pixel_format = film_preset(
            settings,
            "pixelFormat",
            &PIXEL_FORMAT_PRESETS,
            kind.pixel_formats(),
            kind,
        )
        .unwrap_or("rgb");
        let component_format = film_preset(
            settings,
            "componentFormat",
            &COMPONENT_FORMAT_PRESETS,
            kind.component_formats(),
            kind,
        );

        let channels = Channels::from_settings(settings);
        let multichannel = settings.find_one_bool("multichannel", false);
        if multichannel && !kind.supports_multichannel() {
            warn!("{} cannot store multichannel output", kind.plugin());
        }
        if multichannel && kind.supports_multichannel() {
            if file_format.is_some() && file_format != Some("openexr") {
                warn!("Multichannel output requires OpenEXR; overriding file format");
                file_format = Some("openexr");
            }
            return Self {
                kind,
                file_format,
                pixel_format: channels.pixel_formats(),
                channel_names: Some(channels.channel_names()),
                component_format,
            };
        }

        Self {
            kind,
            file_format,
            pixel_format: pixel_format.to_string(),
            channel_names: None,
            component_format,
        }
    }

    /// Returns the output image extension.
    pub fn extension(&self) -> &'static str {
        if self.channel_names.is_some() {
            return "exr";
        }
        match self.file_format {
            Some("rgbe") => "hdr",
            Some("pfm") => "pfm",
            Some("png") => "png",
            Some("jpeg") => "jpg",
            Some("matlab") => "m",
            Some("mathematica") => "cdf",
            Some("numpy") => "npy",
            _ => "exr",
        }
    }

    /// Builds the film element.
    ///
    /// * `settings` - Render settings.
    /// * `rfilter`  - Reconstruction filter appended to the film.
    pub fn to_element(&self, settings: &RenderSettings, rfilter: Element) -> Element {
        let mut film = Element::plugin("film", self.kind.plugin(), None)
            .with_child(Element::integer("height", settings.height))
            .with_child(Element::integer("width", settings.width));

        if let Some(format) = self.file_format {
            film.add_child(Element::string("fileFormat", format));
        }
        film.add_child(Element::string("pixelFormat", &self.pixel_format));
        if let Some(names) = &self.channel_names {
            film.add_child(Element::string("channelNames", names));
        }
        if let Some(format) = self.component_format {
            film.add_child(Element::string("componentFormat", format));
        }

        match self.kind {
            FilmKind::Ldr => {
                let method = TONEMAP_PRESETS.resolve(&settings.find_one_string("tonemapMethod", "Gamma"));
                film.add_child(Element::string("tonemapMethod", method));
                film.add_child(Element::float("gamma", settings.find_one_float("gamma", -1.0)));
                film.add_child(Element::float("exposure", settings.find_one_float("exposure", 0.0)));
                film.add_child(Element::float("key", settings.find_one_float("key", 0.18)));
                film.add_child(Element::float("burn", settings.find_one_float("burn", 0.0)));
            }
            FilmKind::Math => {
                film.add_child(Element::integer("digits", settings.find_one_int("digits", 4)));
                film.add_child(Element::string(
                    "variable",
                    &settings.find_one_string("variable", "data"),
                ));
            }
            FilmKind::Hdr | FilmKind::HdrTiled => (),
        }

        if matches!(self.kind, FilmKind::Hdr | FilmKind::Ldr) {
            film.add_child(Element::boolean("banner", settings.find_one_bool("banner", false)));
        }
        if self.kind != FilmKind::HdrTiled {
            film.add_child(Element::boolean(
                "highQualityEdges",
                settings.find_one_bool("highQualityEdges", false),
            ));
        }

        film.add_child(rfilter);
        film
    }
}
