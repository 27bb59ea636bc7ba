//! Diffuse Materials

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Ideal diffuse reflector.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn diffuse(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let bsdf = Element::plugin("bsdf", "diffuse", id).with_child(spectrum_param(
        ctx,
        node,
        "reflectance",
        Color::grey(0.5),
        ColorSpace::Srgb,
        None,
    )?);
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Rough diffuse reflector (Oren-Nayar).
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn rough_diffuse(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    let bsdf = Element::plugin("bsdf", "roughdiffuse", id)
        .with_child(spectrum_param(
            ctx,
            node,
            "reflectance",
            Color::grey(0.5),
            ColorSpace::Srgb,
            None,
        )?)
        .with_child(float_param(ctx, node, "alpha", 0.2, None)?)
        .with_child(bool_value(ctx, node, "useFastApprox", false));
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Diffuse transmitter.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn diffuse_transmitter(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    let bsdf = Element::plugin("bsdf", "difftrans", id).with_child(spectrum_param(
        ctx,
        node,
        "transmittance",
        Color::grey(0.5),
        ColorSpace::Srgb,
        None,
    )?);
    Ok(Some(Shader::Bsdf(bsdf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use pbrt_core::host::*;

    #[test]
    fn diffuse_reflectance() {
        let mut host = MemoryHost::new();
        host.add_node("M", "MitsubaDiffuseShader")
            .set("reflectance", Color::new(0.1, 0.2, 0.3));
        let e = bsdf(&host, "M", Some("M"));
        assert_eq!(e.plugin_type(), Some("diffuse"));
        assert_eq!(e.id(), Some("M"));
        assert_eq!(
            e.child_named("srgb", "reflectance").and_then(|c| c.attr("value")),
            Some("0.1 0.2 0.3")
        );
    }

    #[test]
    fn rough_diffuse_parameters() {
        let mut host = MemoryHost::new();
        host.add_node("R", "MitsubaRoughDiffuseShader")
            .set("alpha", 0.4)
            .set("useFastApprox", true);
        let e = bsdf(&host, "R", None);
        assert_eq!(e.plugin_type(), Some("roughdiffuse"));
        assert_eq!(e.id(), None);
        assert_eq!(e.value_of("alpha"), Some("0.4"));
        assert_eq!(e.value_of("useFastApprox"), Some("true"));
    }

    #[test]
    fn diffuse_transmitter_default() {
        let mut host = MemoryHost::new();
        host.add_node("T", "MitsubaDiffuseTransmitterShader");
        let e = bsdf(&host, "T", Some("T"));
        assert_eq!(e.plugin_type(), Some("difftrans"));
        assert_eq!(e.value_of("transmittance"), Some("0.5 0.5 0.5"));
    }
}
