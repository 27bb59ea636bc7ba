//! Coatings

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Returns the coating layer parameters followed by the coated BSDF.
fn coating_params(ctx: &TranslateContext, node: &str) -> Result<Vec<Element>, String> {
    let [int_ior, ext_ior] = ior_params(ctx, node);
    let mut params = vec![
        int_ior,
        ext_ior,
        float_value(ctx, node, "thickness", 1.0),
        spectrum_param(ctx, node, "sigmaA", Color::BLACK, ColorSpace::Linear, None)?,
        spectrum_param(
            ctx,
            node,
            "specularReflectance",
            Color::WHITE,
            ColorSpace::Srgb,
            None,
        )?,
    ];
    if let Some(inner) = nested_bsdf(ctx, node, "bsdf", true)? {
        params.push(inner);
    }
    Ok(params)
}

/// Smooth dielectric coating over a nested BSDF.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn coating(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "coating", id);
    for param in coating_params(ctx, node)? {
        bsdf.add_child(param);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Rough dielectric coating over a nested BSDF. The anisotropic distribution
/// is not supported.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn rough_coating(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "roughcoating", id);
    for param in distribution_params(ctx, node, "distribution", "alpha", false)? {
        bsdf.add_child(param);
    }
    for param in coating_params(ctx, node)? {
        bsdf.add_child(param);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}
