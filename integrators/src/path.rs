//! Path Integrators

use super::*;
use pbrt_core::element::*;

/// Parameters of `path`, `volpath` and `volpath_simple`.
///
/// * `p` - Integrator settings.
pub fn path_params(p: &IntegratorParams) -> Vec<Element> {
    vec![
        p.max_depth(-1),
        p.integer("rrDepth", 5),
        p.boolean("strictNormals", false),
        p.boolean("hideEmitters", false),
    ]
}
