//! Area Light Material

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Area emitter attached to the shape using the shader. It is always inlined
/// in the shape so the id is unused.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `_id`  - Unused.
pub fn area_light(ctx: &TranslateContext, node: &str, _id: Option<&str>) -> Result<Option<Shader>, String> {
    let emitter = Element::plugin("emitter", "area", None)
        .with_child(color_value(ctx, node, "radiance", Color::WHITE, ColorSpace::Linear))
        .with_child(float_value(ctx, node, "samplingWeight", 1.0));
    Ok(Some(Shader::Emitter(emitter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use pbrt_core::host::*;

    #[test]
    fn area_emitter() {
        let mut host = MemoryHost::new();
        host.add_node("L", "MitsubaObjectAreaLightShader")
            .set("radiance", Color::new(10.0, 9.0, 8.0))
            .set("twosided", true);
        match translate(&host, "L", Some("L")) {
            Some(Shader::Emitter(e)) => {
                assert_eq!(e.plugin_type(), Some("area"));
                assert_eq!(e.value_of("radiance"), Some("10 9 8"));
                assert_eq!(e.value_of("samplingWeight"), Some("1"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
