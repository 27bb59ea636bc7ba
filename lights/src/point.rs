//! Point Light Source

use super::*;
use core::context::*;
use core::element::*;

/// Returns a `point` emitter at the light's world position.
///
/// * `ctx`  - Translation context.
/// * `node` - Light node.
pub fn point_light(ctx: &TranslateContext, node: &str) -> Result<Element, String> {
    let world = ctx.host.world_matrix(node)?;
    Ok(Element::plugin("emitter", "point", None)
        .with_child(light_power(ctx, node, "intensity"))
        .with_child(Element::point("position", &world.translation())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tests::*;
    use core::geometry::*;
    use core::host::*;

    #[test]
    fn position_from_translation() {
        let mut host = MemoryHost::new();
        let mut world = Matrix4x4::IDENTITY;
        world.m[3] = [1.0, 2.5, -3.0, 1.0];
        host.add_node("pt", POINT_LIGHT_KIND)
            .set("worldMatrix", world)
            .set("intensity", 3.0);
        let e = with_ctx(&host, |ctx| point_light(ctx, "pt").unwrap());
        let p = e.child_named("point", "position").unwrap();
        assert_eq!(p.attr("x"), Some("1"));
        assert_eq!(p.attr("y"), Some("2.5"));
        assert_eq!(p.attr("z"), Some("-3"));
        assert_eq!(e.value_of("intensity"), Some("3 3 3"));
    }
}
