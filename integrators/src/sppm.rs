//! Photon Mapping

use super::*;
use pbrt_core::element::*;

/// Parameters of `photonmapper`.
///
/// * `p` - Integrator settings.
pub fn photon_mapper_params(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.integer("directSamples", 16),
        p.integer("glossySamples", 32),
        p.max_depth(-1),
        p.integer("globalPhotons", 250000),
        p.integer("causticPhotons", 250000),
        p.integer("volumePhotons", 250000),
        p.float("globalLookupRadius", 0.05),
        p.float("causticLookupRadius", 0.0125),
        p.integer("lookupSize", 120),
        p.integer("granularity", 0),
        p.boolean("hideEmitters", false),
        p.integer("rrDepth", 5),
    ]
}

/// Parameters of `ppm` and `sppm`.
///
/// * `p` - Integrator settings.
pub fn progressive_photon_map_params(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.max_depth(-1),
        p.integer("photonCount", 250000),
        p.float("initialRadius", 0.0),
        p.float("alpha", 0.7),
        p.integer("granularity", 0),
        p.integer("rrDepth", 5),
        p.integer("maxPasses", 10),
    ]
}
