//! Bidirectional and Particle Tracers

use super::*;
use pbrt_core::element::*;

/// Parameters of `bdpt`.
///
/// * `p` - Integrator settings.
pub fn bdpt_params(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.max_depth(-1),
        p.boolean("lightImage", true),
        p.boolean("sampleDirect", true),
        p.integer("rrDepth", 5),
    ]
}

/// Parameters of `ptracer`.
///
/// * `p` - Integrator settings.
pub fn ptracer_params(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.max_depth(-1),
        p.integer("rrDepth", 5),
        p.integer("granularity", 200000),
        p.boolean("bruteForce", false),
    ]
}

/// Parameters of `vpl`.
///
/// * `p` - Integrator settings.
pub fn vpl_params(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.max_depth(5),
        p.integer("shadowMapResolution", 512),
        p.float("clamping", 0.1),
    ]
}
