//! Sample Generators

use pbrt_core::common::*;
use pbrt_core::element::*;
use pbrt_core::settings::*;

/// Stored scramble value meaning "seed with the frame number".
pub const SCRAMBLE_FROM_FRAME: Int = -1;

/// Sample generators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SamplerKind {
    /// Independent uniform samples.
    Independent,

    /// Stratified samples.
    Stratified,

    /// Low discrepancy samples.
    LdSampler,

    /// Halton quasi-Monte Carlo sequence.
    Halton,

    /// Hammersley quasi-Monte Carlo point set.
    Hammersley,

    /// Sobol quasi-Monte Carlo sequence.
    Sobol,
}

impl SamplerKind {
    /// Returns the sampler selected by the render settings. Unknown names fall
    /// back to the independent sampler.
    ///
    /// * `settings` - Render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let name = settings.find_one_string("sampler", "Independent Sampler");
        match name.as_str() {
            "Independent Sampler" => Self::Independent,
            "Stratified Sampler" => Self::Stratified,
            "Low Discrepancy Sampler" => Self::LdSampler,
            "Halton QMC Sampler" => Self::Halton,
            "Hammersley QMC Sampler" => Self::Hammersley,
            "Sobol QMC Sampler" => Self::Sobol,
            _ => {
                warn!("Unknown sampler '{name}'; using 'Independent Sampler'");
                Self::Independent
            }
        }
    }

    /// Returns the plugin name.
    pub fn plugin(&self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Stratified => "stratified",
            Self::LdSampler => "ldsampler",
            Self::Halton => "halton",
            Self::Hammersley => "hammersley",
            Self::Sobol => "sobol",
        }
    }
}

/// Returns the `sampler` element for the render settings.
///
/// * `settings` - Render settings.
pub fn make_sampler(settings: &RenderSettings) -> Element {
    let kind = SamplerKind::from_settings(settings);
    let mut sampler = Element::plugin("sampler", kind.plugin(), None).with_child(Element::integer(
        "sampleCount",
        settings.find_one_int("sampleCount", 4),
    ));

    match kind {
        SamplerKind::Stratified | SamplerKind::LdSampler => {
            sampler.add_child(Element::integer(
                "dimension",
                settings.find_one_int("samplerDimension", 4),
            ));
        }
        SamplerKind::Halton | SamplerKind::Hammersley | SamplerKind::Sobol => {
            let mut scramble = settings.find_one_int("samplerScramble", SCRAMBLE_FROM_FRAME);
            if scramble == SCRAMBLE_FROM_FRAME {
                scramble = settings.frame;
            }
            sampler.add_child(Element::integer("scramble", scramble));
        }
        SamplerKind::Independent => (),
    }
    sampler
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::paramset::*;
    use proptest::prelude::*;

    fn settings(name: &str, scramble: Option<Int>, frame: Int) -> RenderSettings {
        let mut ps = ParamSet::new();
        ps.add_string("sampler", String::from(name));
        ps.add_int("sampleCount", 16);
        if let Some(s) = scramble {
            ps.add_int("samplerScramble", s);
        }
        RenderSettings::new(ps, frame, (4, 4))
    }

    #[test]
    fn sobol_scramble_from_frame() {
        let e = make_sampler(&settings("Sobol QMC Sampler", Some(-1), 42));
        assert_eq!(e.plugin_type(), Some("sobol"));
        assert_eq!(e.value_of("scramble"), Some("42"));
        assert_eq!(e.value_of("sampleCount"), Some("16"));
    }

    #[test]
    fn explicit_scramble_is_kept() {
        let e = make_sampler(&settings("Halton QMC Sampler", Some(7), 42));
        assert_eq!(e.value_of("scramble"), Some("7"));
    }

    #[test]
    fn stratified_has_dimension() {
        let e = make_sampler(&settings("Stratified Sampler", None, 1));
        assert_eq!(e.value_of("dimension"), Some("4"));
        assert!(e.child_named("integer", "scramble").is_none());
    }

    #[test]
    fn unknown_sampler_is_independent() {
        let e = make_sampler(&settings("Blue Noise", None, 1));
        assert_eq!(e.plugin_type(), Some("independent"));
        assert_eq!(e.children.len(), 1);
    }

    proptest! {
        #[test]
        fn qmc_sentinel_uses_frame(frame in 0..10_000i32, kind in 0usize..3) {
            let name = ["Halton QMC Sampler", "Hammersley QMC Sampler", "Sobol QMC Sampler"][kind];
            let e = make_sampler(&settings(name, None, frame));
            let expected = frame.to_string();
            prop_assert_eq!(e.value_of("scramble"), Some(expected.as_str()));
        }
    }
}
