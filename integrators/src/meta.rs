//! Meta Integrators

use super::*;
use pbrt_core::element::*;
use pbrt_core::settings::*;

/// Integrators that wrap another integrator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MetaIntegrator {
    None,
    Adaptive,
    IrradianceCache,
}

impl MetaIntegrator {
    /// Returns the meta integrator selected by the render settings.
    ///
    /// * `settings` - Render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let name = settings.find_one_string("metaIntegrator", "None");
        match name.as_str() {
            "None" => Self::None,
            "Adaptive" => Self::Adaptive,
            "Irradiance Cache" => Self::IrradianceCache,
            _ => {
                warn!("Unknown meta integrator '{name}'; using 'None'");
                Self::None
            }
        }
    }
}

/// Wraps an integrator in the selected meta integrator. Percentages in the
/// adaptive settings are converted to fractions.
///
/// * `settings`   - Render settings.
/// * `integrator` - Integrator to wrap.
pub fn wrap_meta(settings: &RenderSettings, integrator: Element) -> Element {
    match MetaIntegrator::from_settings(settings) {
        MetaIntegrator::None => integrator,
        MetaIntegrator::Adaptive => {
            let p = IntegratorParams::new(settings, "miAdaptive");
            Element::plugin("integrator", "adaptive", None)
                .with_child(Element::float("maxError", p.float_value("maxError", 5.0) / 100.0))
                .with_child(Element::float("pValue", p.float_value("pValue", 5.0) / 100.0))
                .with_child(p.integer("maxSampleFactor", 32))
                .with_child(integrator)
        }
        MetaIntegrator::IrradianceCache => {
            let p = IntegratorParams::new(settings, "miIrradianceCache");
            Element::plugin("integrator", "irrcache", None)
                .with_child(p.integer("resolution", 14))
                .with_child(p.float("quality", 1.0))
                .with_child(p.boolean("gradients", true))
                .with_child(p.boolean("clampNeighbor", true))
                .with_child(p.boolean("clampScreen", true))
                .with_child(p.boolean("overture", true))
                .with_child(p.float("qualityAdjustment", 0.5))
                .with_child(p.boolean("indirectOnly", false))
                .with_child(p.boolean("debug", false))
                .with_child(integrator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tests::*;

    #[test]
    fn adaptive_percentages() {
        let s = settings(|ps| {
            ps.add_string("metaIntegrator", String::from("Adaptive"));
            ps.add_float("miAdaptiveMaxError", 10.0);
        });
        let e = wrap_meta(&s, leaf_integrator(&s));
        assert_eq!(e.plugin_type(), Some("adaptive"));
        assert_eq!(e.value_of("maxError"), Some("0.1"));
        assert_eq!(e.value_of("pValue"), Some("0.05"));
        assert_eq!(e.children.last().unwrap().plugin_type(), Some("path"));
    }

    #[test]
    fn irradiance_cache_wraps_leaf() {
        let s = settings(|ps| ps.add_string("metaIntegrator", String::from("Irradiance Cache")));
        let e = wrap_meta(&s, leaf_integrator(&s));
        assert_eq!(e.plugin_type(), Some("irrcache"));
        assert_eq!(e.children_tagged("integrator").count(), 1);
    }

    #[test]
    fn none_is_identity() {
        let s = settings(|_| ());
        let leaf = leaf_integrator(&s);
        assert_eq!(wrap_meta(&s, leaf.clone()), leaf);
    }
}
