//! Glossy Materials

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::presets::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Returns the specular and diffuse reflectances of a glossy BSDF.
fn reflectances(ctx: &TranslateContext, node: &str) -> Result<[Element; 2], String> {
    Ok([
        spectrum_param(
            ctx,
            node,
            "specularReflectance",
            Color::grey(0.2),
            ColorSpace::Srgb,
            None,
        )?,
        spectrum_param(
            ctx,
            node,
            "diffuseReflectance",
            Color::grey(0.5),
            ColorSpace::Srgb,
            None,
        )?,
    ])
}

/// Modified Phong.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn phong(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let [specular, diffuse] = reflectances(ctx, node)?;
    let bsdf = Element::plugin("bsdf", "phong", id)
        .with_child(float_param(ctx, node, "exponent", 30.0, None)?)
        .with_child(specular)
        .with_child(diffuse);
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Anisotropic Ward.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn ward(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let label = ctx
        .host
        .find_one_string(node, "variant", String::from("Balanced"));
    let [specular, diffuse] = reflectances(ctx, node)?;
    let bsdf = Element::plugin("bsdf", "ward", id)
        .with_child(Element::string("variant", WARD_PRESETS.resolve(&label)))
        .with_child(float_param(ctx, node, "alphaU", 0.1, None)?)
        .with_child(float_param(ctx, node, "alphaV", 0.1, None)?)
        .with_child(specular)
        .with_child(diffuse);
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Irawan-Marschner woven cloth. Needs a weave pattern file.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn irawan(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let filename = ctx.host.find_one_string(node, "filename", String::new());
    if filename.is_empty() {
        warn!("Cloth shader '{node}' has no weave pattern file; skipping");
        return Ok(None);
    }

    let mut bsdf = Element::plugin("bsdf", "irawan", id)
        .with_child(Element::string("filename", &filename))
        .with_child(float_value(ctx, node, "repeatU", 1.0))
        .with_child(float_value(ctx, node, "repeatV", 1.0));
    for attr in ["kd", "ks", "warp_kd", "warp_ks", "weft_kd", "weft_ks"] {
        bsdf.add_child(color_value(ctx, node, attr, Color::grey(0.5), ColorSpace::Linear));
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;
    use pbrt_core::host::*;

    #[test]
    fn ward_variant() {
        let mut host = MemoryHost::new();
        host.add_node("W", "MitsubaWardShader").set("variant", "Ward-Duer");
        let e = bsdf(&host, "W", Some("W"));
        assert_eq!(e.value_of("variant"), Some("ward-duer"));
        assert_eq!(e.value_of("alphaU"), Some("0.1"));

        host.set_attr("W", "variant", "Sideways");
        assert_eq!(bsdf(&host, "W", Some("W")).value_of("variant"), Some("balanced"));
    }

    #[test]
    fn phong_exponent() {
        let mut host = MemoryHost::new();
        host.add_node("P", "MitsubaPhongShader").set("exponent", 12);
        let e = bsdf(&host, "P", Some("P"));
        assert_eq!(e.value_of("exponent"), Some("12"));
        assert_eq!(e.value_of("specularReflectance"), Some("0.2 0.2 0.2"));
    }

    #[test]
    fn irawan_needs_pattern() {
        let mut host = MemoryHost::new();
        host.add_node("I", "MitsubaIrawanShader");
        assert_eq!(translate(&host, "I", Some("I")), None);

        host.set_attr("I", "filename", "cloth/silk.wv");
        let e = bsdf(&host, "I", Some("I"));
        assert_eq!(e.value_of("filename"), Some("cloth/silk.wv"));
        assert_eq!(e.children_tagged("rgb").count(), 6);
    }
}
