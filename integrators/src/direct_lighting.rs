//! Ambient Occlusion and Direct Illumination

use super::*;
use pbrt_core::element::*;

/// Parameters of `ao`. With `useAutomaticRayLength` the ray length is left to
/// the renderer (`-1`).
///
/// * `p` - Integrator settings.
pub fn ao_params(p: &IntegratorParams) -> Vec<Element> {
    let ray_length = if p.bool_value("useAutomaticRayLength", true) {
        Element::float("rayLength", -1.0)
    } else {
        p.float("rayLength", -1.0)
    };
    vec![p.integer("shadingSamples", 1), ray_length]
}

/// Parameters of `direct`. Shading samples are either shared or split into
/// emitter and BSDF samples.
///
/// * `p` - Integrator settings.
pub fn direct_params(p: &IntegratorParams) -> Vec<Element> {
    let mut params = if p.bool_value("useEmitterAndBSDFSamples", false) {
        vec![p.integer("emitterSamples", 1), p.integer("bsdfSamples", 1)]
    } else {
        vec![p.integer("shadingSamples", 1)]
    };
    params.push(p.boolean("strictNormals", false));
    params.push(p.boolean("hideEmitters", false));
    params
}
