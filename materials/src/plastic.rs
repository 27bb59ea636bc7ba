//! Plastic Materials

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Returns the parameters shared by smooth and rough plastic.
fn plastic_params(ctx: &TranslateContext, node: &str) -> Result<Vec<Element>, String> {
    let [int_ior, ext_ior] = ior_params(ctx, node);
    Ok(vec![
        int_ior,
        ext_ior,
        spectrum_param(
            ctx,
            node,
            "specularReflectance",
            Color::WHITE,
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
        bool_value(ctx, node, "nonlinear", false),
    ])
}

/// Smooth plastic.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn plastic(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "plastic", id);
    for param in plastic_params(ctx, node)? {
        bsdf.add_child(param);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Rough plastic. The anisotropic distribution is not supported.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn rough_plastic(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "roughplastic", id);
    for param in distribution_params(ctx, node, "distribution", "alpha", false)? {
        bsdf.add_child(param);
    }
    for param in plastic_params(ctx, node)? {
        bsdf.add_child(param);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}
