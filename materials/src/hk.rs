//! Hanrahan-Krueger Material

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::texture::*;
use media::*;

/// Layer of scattering medium under a smooth boundary.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn hk(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "hk", id);
    for param in scattering_params(ctx, node)? {
        bsdf.add_child(param);
    }
    bsdf.add_child(float_value(ctx, node, "thickness", 1.0));
    bsdf.add_child(phase_function(ctx, node));
    Ok(Some(Shader::Bsdf(bsdf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use pbrt_core::host::*;

    #[test]
    fn hk_modes() {
        let mut host = MemoryHost::new();
        host.add_node("H", "MitsubaHKShader")
            .set("useSigmaSA", true)
            .set("useSigmaTAlbedo", true)
            .set("thickness", 0.5);
        let e = bsdf(&host, "H", Some("H"));
        assert_eq!(e.plugin_type(), Some("hk"));
        assert!(e.child_named("rgb", "sigmaS").is_some());
        assert!(e.child_named("rgb", "sigmaT").is_none());
        assert_eq!(e.value_of("thickness"), Some("0.5"));
        assert_eq!(e.children.last().map(|c| c.tag.as_str()), Some("phase"));

        host.set_attr("H", "useSigmaSA", false);
        host.set_attr("H", "useSigmaTAlbedo", false);
        host.set_attr("H", "material", "Apple");
        let e = bsdf(&host, "H", Some("H"));
        assert_eq!(e.value_of("material"), Some("Apple"));
    }
}
