//! Directional Light Source

use super::*;
use core::context::*;
use core::element::*;

/// Returns a `directional` emitter shining down the light's negative z-axis.
///
/// * `ctx`  - Translation context.
/// * `node` - Light node.
pub fn directional_light(ctx: &TranslateContext, node: &str) -> Result<Element, String> {
    let world = ctx.host.world_matrix(node)?;
    Ok(Element::plugin("emitter", "directional", None)
        .with_child(light_power(ctx, node, "irradiance"))
        .with_child(Element::vector("direction", &-world.axis(2))))
}
