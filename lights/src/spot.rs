//! Spot Light Source

use super::*;
use core::common::*;
use core::context::*;
use core::element::*;
use core::geometry::*;
use core::host::*;

/// Returns a `spot` emitter. The cone is given by the light's cone angle and
/// penumbra, the orientation by its parent transform's rotation.
///
/// * `ctx`  - Translation context.
/// * `node` - Light node.
pub fn spot_light(ctx: &TranslateContext, node: &str) -> Result<Element, String> {
    let cone = ctx.host.find_one_float(node, "coneAngle", 40.0);
    let penumbra = ctx.host.find_one_float(node, "penumbraAngle", 0.0);

    let transform = parent_transform(ctx.host, node);
    let r = ctx
        .host
        .find_one_vector3f(&transform, "rotate", Vector3f::ZERO);
    let position = ctx.host.world_matrix(node)?.translation();

    let mut ops = vec![rotate("y", 180.0)];
    for (axis, angle) in [("x", r.x), ("y", r.y), ("z", r.z)] {
        if angle != 0.0 {
            ops.push(rotate(axis, angle));
        }
    }
    ops.push(
        Element::new("translate")
            .with_attr("x", &format_float(position.x))
            .with_attr("y", &format_float(position.y))
            .with_attr("z", &format_float(position.z)),
    );

    let mut to_world = Element::new("transform").with_attr("name", "toWorld");
    for op in ops {
        to_world.add_child(op);
    }

    Ok(Element::plugin("emitter", "spot", None)
        .with_child(light_power(ctx, node, "intensity"))
        .with_child(Element::float("cutoffAngle", cone / 2.0 + penumbra))
        .with_child(Element::float("beamWidth", cone / 2.0))
        .with_child(to_world))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tests::*;

    #[test]
    fn cone_and_transform() {
        let mut host = MemoryHost::new();
        let mut world = Matrix4x4::IDENTITY;
        world.m[3] = [0.0, 5.0, 0.0, 1.0];
        host.add_node("spot", "transform")
            .set("rotate", Vector3f::new(-90.0, 0.0, 15.0))
            .set("worldMatrix", world);
        host.add_node("spotShape", SPOT_LIGHT_KIND)
            .parent("spot")
            .set("coneAngle", 30.0)
            .set("penumbraAngle", 5.0);
        let e = with_ctx(&host, |ctx| spot_light(ctx, "spotShape").unwrap());
        assert_eq!(e.value_of("cutoffAngle"), Some("20"));
        assert_eq!(e.value_of("beamWidth"), Some("15"));

        let ops = &e.children_tagged("transform").next().unwrap().children;
        let desc: Vec<(&str, Option<&str>)> =
            ops.iter().map(|o| (o.tag.as_str(), o.attr("angle"))).collect();
        assert_eq!(
            desc,
            vec![
                ("rotate", Some("180")),
                ("rotate", Some("-90")),
                ("rotate", Some("15")),
                ("translate", None),
            ]
        );
        assert_eq!(ops[1].attr("x"), Some("1"));
        assert_eq!(ops[2].attr("z"), Some("1"));
        assert_eq!(ops[3].attr("y"), Some("5"));
    }
}
