//! Common

use super::*;
use pbrt_core::common::*;
use pbrt_core::element::*;
use pbrt_core::film::*;
use pbrt_core::settings::*;

/// Light transport algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntegratorKind {
    AmbientOcclusion,
    Direct,
    Path,
    VolPath,
    VolPathSimple,
    Bdpt,
    PhotonMapper,
    Ppm,
    Sppm,
    Pssmlt,
    Mlt,
    Erpt,
    PTracer,
    Vpl,
}

/// Integrator, its UI label and the prefix of its render settings, in
/// declaration order.
static INTEGRATOR_TABLE: [(IntegratorKind, &str, &str); 14] = [
    (IntegratorKind::AmbientOcclusion, "Ambient Occlusion", "iAmbientOcclusion"),
    (IntegratorKind::Direct, "Direct Illumination", "iDirectIllumination"),
    (IntegratorKind::Path, "Path Tracer", "iPathTracer"),
    (IntegratorKind::VolPath, "Volumetric Path Tracer", "iVolumetricPathTracer"),
    (
        IntegratorKind::VolPathSimple,
        "Simple Volumetric Path Tracer",
        "iSimpleVolumetricPathTracer",
    ),
    (IntegratorKind::Bdpt, "Bidirectional Path Tracer", "iBidirectionalPathTracer"),
    (IntegratorKind::PhotonMapper, "Photon Map", "iPhotonMapper"),
    (IntegratorKind::Ppm, "Progressive Photon Map", "iProgressivePhotonMap"),
    (
        IntegratorKind::Sppm,
        "Stochastic Progressive Photon Map",
        "iStochasticProgressivePhotonMap",
    ),
    (
        IntegratorKind::Pssmlt,
        "Primary Sample Space Metropolis Light Transport",
        "iPrimarySampleSpaceMetropolisLightTransport",
    ),
    (
        IntegratorKind::Mlt,
        "Path Space Metropolis Light Transport",
        "iPathSpaceMetropolisLightTransport",
    ),
    (
        IntegratorKind::Erpt,
        "Energy Redistribution Path Tracing",
        "iEnergyRedistributionPathTracing",
    ),
    (IntegratorKind::PTracer, "Adjoint Particle Tracer", "iAdjointParticleTracer"),
    (IntegratorKind::Vpl, "Virtual Point Lights", "iVirtualPointLight"),
];

impl IntegratorKind {
    /// All integrators.
    pub const ALL: [IntegratorKind; 14] = [
        Self::AmbientOcclusion,
        Self::Direct,
        Self::Path,
        Self::VolPath,
        Self::VolPathSimple,
        Self::Bdpt,
        Self::PhotonMapper,
        Self::Ppm,
        Self::Sppm,
        Self::Pssmlt,
        Self::Mlt,
        Self::Erpt,
        Self::PTracer,
        Self::Vpl,
    ];

    /// Returns the integrator selected by the render settings. Unknown names
    /// fall back to the path tracer.
    ///
    /// * `settings` - Render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let name = settings.find_one_string("integrator", "Path Tracer");
        match INTEGRATOR_TABLE.iter().find(|(_, label, _)| *label == name) {
            Some((kind, _, _)) => *kind,
            None => {
                warn!("Unknown integrator '{name}'; using 'Path Tracer'");
                Self::Path
            }
        }
    }

    /// Returns the UI label.
    pub fn label(&self) -> &'static str {
        self.entry().1
    }

    /// Returns the prefix of the integrator's render settings.
    pub fn prefix(&self) -> &'static str {
        self.entry().2
    }

    fn entry(&self) -> &'static (IntegratorKind, &'static str, &'static str) {
        &INTEGRATOR_TABLE[*self as usize]
    }

    /// Returns the plugin name.
    pub fn plugin(&self) -> &'static str {
        match self {
            Self::AmbientOcclusion => "ao",
            Self::Direct => "direct",
            Self::Path => "path",
            Self::VolPath => "volpath",
            Self::VolPathSimple => "volpath_simple",
            Self::Bdpt => "bdpt",
            Self::PhotonMapper => "photonmapper",
            Self::Ppm => "ppm",
            Self::Sppm => "sppm",
            Self::Pssmlt => "pssmlt",
            Self::Mlt => "mlt",
            Self::Erpt => "erpt",
            Self::PTracer => "ptracer",
            Self::Vpl => "vpl",
        }
    }

    /// Returns the builder for the integrator.
    fn builder(&self) -> fn(&IntegratorParams) -> Vec<Element> {
        match self {
            Self::AmbientOcclusion => ao_params,
            Self::Direct => direct_params,
            Self::Path | Self::VolPath | Self::VolPathSimple => path_params,
            Self::Bdpt => bdpt_params,
            Self::PhotonMapper => photon_mapper_params,
            Self::Ppm | Self::Sppm => progressive_photon_map_params,
            Self::Pssmlt => pssmlt_params,
            Self::Mlt => mlt_params,
            Self::Erpt => erpt_params,
            Self::PTracer => ptracer_params,
            Self::Vpl => vpl_params,
        }
    }
}

/// Reads the settings of one integrator. Setting names are the integrator's
/// prefix followed by the capitalized parameter name, e.g. `maxDepth` of the
/// path tracer is read from `iPathTracerMaxDepth`.
pub struct IntegratorParams<'a> {
    /// Render settings.
    pub settings: &'a RenderSettings,

    /// Setting name prefix.
    pub prefix: &'a str,
}

impl<'a> IntegratorParams<'a> {
    /// Create a new `IntegratorParams`.
    ///
    /// * `settings` - Render settings.
    /// * `prefix`   - Setting name prefix.
    pub fn new(settings: &'a RenderSettings, prefix: &'a str) -> Self {
        Self { settings, prefix }
    }

    /// Returns the setting name of a parameter.
    ///
    /// * `param` - Parameter name.
    pub fn setting(&self, param: &str) -> String {
        let mut chars = param.chars();
        match chars.next() {
            Some(first) => format!("{}{}{}", self.prefix, first.to_uppercase(), chars.as_str()),
            None => self.prefix.to_string(),
        }
    }

    pub fn bool_value(&self, param: &str, default: bool) -> bool {
        self.settings.find_one_bool(&self.setting(param), default)
    }

    pub fn int_value(&self, param: &str, default: Int) -> Int {
        self.settings.find_one_int(&self.setting(param), default)
    }

    pub fn float_value(&self, param: &str, default: Float) -> Float {
        self.settings.find_one_float(&self.setting(param), default)
    }

    /// Returns a `<boolean>` for a parameter.
    pub fn boolean(&self, param: &str, default: bool) -> Element {
        Element::boolean(param, self.bool_value(param, default))
    }

    /// Returns an `<integer>` for a parameter.
    pub fn integer(&self, param: &str, default: Int) -> Element {
        Element::integer(param, self.int_value(param, default))
    }

    /// Returns a `<float>` for a parameter.
    pub fn float(&self, param: &str, default: Float) -> Element {
        Element::float(param, self.float_value(param, default))
    }

    /// Returns `maxDepth`, which is -1 when `useInfiniteDepth` is on.
    ///
    /// * `default` - Depth if not set.
    pub fn max_depth(&self, default: Int) -> Element {
        if self.bool_value("useInfiniteDepth", false) {
            Element::integer("maxDepth", -1)
        } else {
            self.integer("maxDepth", default)
        }
    }
}

/// Returns the leaf integrator selected by the render settings.
///
/// * `settings` - Render settings.
pub fn leaf_integrator(settings: &RenderSettings) -> Element {
    let kind = IntegratorKind::from_settings(settings);
    let params = IntegratorParams::new(settings, kind.prefix());
    let mut integrator = Element::plugin("integrator", kind.plugin(), None);
    for param in (kind.builder())(&params) {
        integrator.add_child(param);
    }
    integrator
}

/// Returns the integrator tree: the leaf integrator, wrapped by the selected
/// meta integrator. The multichannel wrap applies only when the film is an
/// HDR film with the multichannel toggle set (`film.channel_names` is
/// present); LDR and other films ignore the toggle.
///
/// * `settings` - Render settings.
/// * `film`     - Resolved film.
pub fn make_integrator(settings: &RenderSettings, film: &FilmSpec) -> Element {
    let integrator = wrap_meta(settings, leaf_integrator(settings));
    if film.channel_names.is_some() {
        wrap_multichannel(Channels::from_settings(settings), integrator)
    } else {
        integrator
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pbrt_core::paramset::*;
    use proptest::prelude::*;

    pub fn settings(f: impl FnOnce(&mut ParamSet)) -> RenderSettings {
        let mut ps = ParamSet::new();
        f(&mut ps);
        RenderSettings::new(ps, 1, (4, 4))
    }

    #[test]
    fn setting_names_are_prefixed() {
        let s = RenderSettings::default();
        let p = IntegratorParams::new(&s, "iPathTracer");
        assert_eq!(p.setting("maxDepth"), "iPathTracerMaxDepth");
        assert_eq!(p.setting("rrDepth"), "iPathTracerRrDepth");
    }

    #[test]
    fn unknown_integrator_is_path() {
        let s = settings(|ps| ps.add_string("integrator", String::from("Whitted")));
        assert_eq!(leaf_integrator(&s).plugin_type(), Some("path"));
    }

    #[test]
    fn labels_round_trip() {
        for kind in IntegratorKind::ALL {
            let s = settings(|ps| ps.add_string("integrator", kind.label().to_string()));
            assert_eq!(IntegratorKind::from_settings(&s), kind);
        }
    }

    #[test]
    fn plain_tree_without_meta_or_channels() {
        let s = settings(|ps| {
            ps.add_string("integrator", String::from("Path Tracer"));
            ps.add_int("iPathTracerMaxDepth", 5);
        });
        let film = FilmSpec::from_settings(&s);
        let e = make_integrator(&s, &film);
        assert_eq!(e.plugin_type(), Some("path"));
        assert_eq!(e.value_of("maxDepth"), Some("5"));
        assert_eq!(e.value_of("strictNormals"), Some("false"));
        assert_eq!(e.value_of("hideEmitters"), Some("false"));
    }

    #[test]
    fn full_tree_order() {
        let s = settings(|ps| {
            ps.add_string("integrator", String::from("Bidirectional Path Tracer"));
            ps.add_string("metaIntegrator", String::from("Adaptive"));
            ps.add_bool("multichannel", true);
            ps.add_bool("multichannelDistance", true);
        });
        let film = FilmSpec::from_settings(&s);
        let e = make_integrator(&s, &film);
        assert_eq!(e.plugin_type(), Some("multichannel"));
        assert_eq!(e.children[0].plugin_type(), Some("adaptive"));
        assert_eq!(e.children[0].children_tagged("integrator").count(), 1);
        assert_eq!(e.children[1].value_of("field"), Some("distance"));
    }

    #[test]
    fn ldr_film_is_never_multichannel() {
        let s = settings(|ps| {
            ps.add_string("film", String::from("LDR Film"));
            ps.add_bool("multichannel", true);
            ps.add_bool("multichannelUV", true);
        });
        let film = FilmSpec::from_settings(&s);
        assert_eq!(make_integrator(&s, &film).plugin_type(), Some("path"));
    }

    proptest! {
        #[test]
        fn infinite_depth_overrides_stored_depth(depth in 0..100i32, i in 0usize..14) {
            let kind = IntegratorKind::ALL[i];
            let s = settings(|ps| {
                ps.add_string("integrator", kind.label().to_string());
                ps.add_int(&format!("{}MaxDepth", kind.prefix()), depth);
                ps.add_bool(&format!("{}UseInfiniteDepth", kind.prefix()), true);
            });
            let e = leaf_integrator(&s);
            if let Some(v) = e.value_of("maxDepth") {
                prop_assert_eq!(v, "-1");
            }
        }
    }
}
