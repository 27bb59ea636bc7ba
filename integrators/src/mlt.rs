//! Markov Chain Monte Carlo Integrators

use super::*;
use pbrt_core::element::*;

/// Perturbation strategies shared by `mlt` and `erpt`.
fn perturbations(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.boolean("lensPerturbation", true),
        p.boolean("multiChainPerturbation", true),
        p.boolean("causticPerturbation", true),
        p.boolean("manifoldPerturbation", false),
        p.float("lambda", 50.0),
    ]
}

/// Parameters of `pssmlt`.
///
/// * `p` - Integrator settings.
pub fn pssmlt_params(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.boolean("bidirectional", true),
        p.max_depth(-1),
        p.integer("directSamples", 16),
        p.integer("rrDepth", 5),
        p.integer("luminanceSamples", 100000),
        p.boolean("twoStage", false),
        p.float("pLarge", 0.3),
    ]
}

/// Parameters of `mlt`.
///
/// * `p` - Integrator settings.
pub fn mlt_params(p: &IntegratorParams) -> Vec<Element> {
    let mut params = vec![
        p.max_depth(-1),
        p.integer("directSamples", 16),
        p.integer("luminanceSamples", 100000),
        p.boolean("twoStage", false),
        p.boolean("bidirectionalMutation", true),
    ];
    params.extend(perturbations(p));
    params
}

/// Parameters of `erpt`.
///
/// * `p` - Integrator settings.
pub fn erpt_params(p: &IntegratorParams) -> Vec<Element> {
    let mut params = vec![
        p.max_depth(-1),
        p.float("numChains", 1.0),
        p.integer("maxChains", 0),
        p.integer("chainLength", 1),
        p.integer("directSamples", 16),
    ];
    params.extend(perturbations(p));
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tests::*;

    #[test]
    fn mlt_has_perturbations() {
        let s = settings(|ps| {
            ps.add_string("integrator", String::from("Path Space Metropolis Light Transport"));
            ps.add_bool("iPathSpaceMetropolisLightTransportManifoldPerturbation", true);
        });
        let e = leaf_integrator(&s);
        assert_eq!(e.plugin_type(), Some("mlt"));
        assert_eq!(e.value_of("manifoldPerturbation"), Some("true"));
        assert_eq!(e.value_of("lambda"), Some("50"));
    }

    #[test]
    fn pssmlt_large_step_probability() {
        let s = settings(|ps| {
            ps.add_string(
                "integrator",
                String::from("Primary Sample Space Metropolis Light Transport"),
            );
            ps.add_float("iPrimarySampleSpaceMetropolisLightTransportPLarge", 0.5);
        });
        assert_eq!(leaf_integrator(&s).value_of("pLarge"), Some("0.5"));
    }
}
