//! Dielectrics

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Returns a dielectric BSDF of the given plugin, optionally rough.
fn dielectric_bsdf(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
    plugin: &str,
    rough: bool,
) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", plugin, id);
    if rough {
        for param in distribution_params(ctx, node, "distribution", "alpha", true)? {
            bsdf.add_child(param);
        }
    }
    for param in ior_params(ctx, node) {
        bsdf.add_child(param);
    }
    bsdf.add_child(spectrum_param(
        ctx,
        node,
        "specularReflectance",
        Color::WHITE,
        ColorSpace::Srgb,
        None,
    )?);
    bsdf.add_child(spectrum_param(
        ctx,
        node,
        "specularTransmittance",
        Color::WHITE,
        ColorSpace::Srgb,
        None,
    )?);
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Smooth dielectric boundary.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn dielectric(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    dielectric_bsdf(ctx, node, id, "dielectric", false)
}

/// Thin dielectric sheet.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn thin_dielectric(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    dielectric_bsdf(ctx, node, id, "thindielectric", false)
}

/// Rough dielectric boundary.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn rough_dielectric(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    dielectric_bsdf(ctx, node, id, "roughdielectric", true)
}
