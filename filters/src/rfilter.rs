//! Reconstruction Filters

use core::common::*;
use core::element::*;
use core::settings::*;

/// Image reconstruction filters supported by the film.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReconstructionFilter {
    /// Box filter.
    Box,

    /// Tent filter.
    Tent,

    /// Gaussian filter with standard deviation in pixels.
    Gaussian { stddev: Float },

    /// Mitchell-Netravali filter with its `B` and `C` parameters.
    Mitchell { b: Float, c: Float },

    /// Catmull-Rom filter.
    CatmullRom,

    /// Windowed sinc filter with a number of lobes.
    Lanczos { lobes: Int },
}

impl ReconstructionFilter {
    /// Returns the plugin name.
    pub fn plugin(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Tent => "tent",
            Self::Gaussian { .. } => "gaussian",
            Self::Mitchell { .. } => "mitchell",
            Self::CatmullRom => "catmullrom",
            Self::Lanczos { .. } => "lanczos",
        }
    }

    /// Returns the `rfilter` element.
    pub fn to_element(&self) -> Element {
        let rfilter = Element::plugin("rfilter", self.plugin(), None);
        match *self {
            Self::Gaussian { stddev } => rfilter.with_child(Element::float("stddev", stddev)),
            Self::Mitchell { b, c } => rfilter
                .with_child(Element::float("B", b))
                .with_child(Element::float("C", c)),
            Self::Lanczos { lobes } => rfilter.with_child(Element::integer("lobes", lobes)),
            Self::Box | Self::Tent | Self::CatmullRom => rfilter,
        }
    }
}

impl From<&RenderSettings> for ReconstructionFilter {
    /// Create a `ReconstructionFilter` from render settings. Unknown filters
    /// fall back to the Gaussian.
    ///
    /// * `settings` - Render settings.
    fn from(settings: &RenderSettings) -> Self {
        let name = settings.find_one_string("reconstructionFilter", "Gaussian filter");
        match name.as_str() {
            "Box filter" => Self::Box,
            "Tent filter" => Self::Tent,
            "Gaussian filter" => Self::Gaussian {
                stddev: settings.find_one_float("rfilterGaussianStddev", 0.5),
            },
            "Mitchell-Netravali filter" => Self::Mitchell {
                b: settings.find_one_float("rfilterMitchellB", 1.0 / 3.0),
                c: settings.find_one_float("rfilterMitchellC", 1.0 / 3.0),
            },
            "Catmull-Rom filter" => Self::CatmullRom,
            "Lanczos filter" => Self::Lanczos {
                lobes: settings.find_one_int("rfilterLanczosLobes", 3),
            },
            _ => {
                warn!("Unknown reconstruction filter '{name}'; using 'Gaussian filter'");
                Self::Gaussian { stddev: 0.5 }
            }
        }
    }
}

/// Returns the `rfilter` element for the render settings.
///
/// * `settings` - Render settings.
pub fn make_rfilter(settings: &RenderSettings) -> Element {
    ReconstructionFilter::from(settings).to_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::paramset::*;

    fn settings(name: &str) -> RenderSettings {
        let mut ps = ParamSet::new();
        ps.add_string("reconstructionFilter", String::from(name));
        ps.add_int("rfilterLanczosLobes", 2);
        RenderSettings::new(ps, 1, (4, 4))
    }

    #[test]
    fn filters_by_name() {
        assert_eq!(make_rfilter(&settings("Box filter")).plugin_type(), Some("box"));
        assert_eq!(make_rfilter(&settings("Catmull-Rom filter")).plugin_type(), Some("catmullrom"));
        let lanczos = make_rfilter(&settings("Lanczos filter"));
        assert_eq!(lanczos.value_of("lobes"), Some("2"));
    }

    #[test]
    fn unknown_filter_is_gaussian() {
        let e = make_rfilter(&settings("Sharpest"));
        assert_eq!(e.plugin_type(), Some("gaussian"));
        assert_eq!(e.value_of("stddev"), Some("0.5"));
    }
}
