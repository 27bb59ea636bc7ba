//! Homogeneous Media

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;

/// Returns a `homogeneous` medium with constant scattering coefficients.
///
/// * `ctx`  - Translation context.
/// * `node` - Medium node.
/// * `id`   - Optional id used by shape references.
pub fn homogeneous_medium(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Element, String> {
    let mut medium = Element::plugin("medium", "homogeneous", id);
    for param in scattering_params(ctx, node)? {
        medium.add_child(param);
    }
    medium.add_child(Element::float(
        "scale",
        ctx.host.find_one_float(node, "scale", 1.0),
    ));
    medium.add_child(phase_function(ctx, node));
    debug!("Homogeneous medium '{node}'");
    Ok(medium)
}
