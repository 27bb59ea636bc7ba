//! Composite Materials

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Two-sided BSDF with a front and an optional back side.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn two_sided(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "twosided", id);
    if let Some(front) = nested_bsdf(ctx, node, "frontBSDF", true)? {
        bsdf.add_child(front);
    }
    if let Some(back) = nested_bsdf(ctx, node, "backBSDF", false)? {
        bsdf.add_child(back);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Opacity mask over a nested BSDF.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn mask(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "mask", id).with_child(spectrum_param(
        ctx,
        node,
        "opacity",
        Color::grey(0.5),
        ColorSpace::Srgb,
        None,
    )?);
    if let Some(inner) = nested_bsdf(ctx, node, "bsdf", true)? {
        bsdf.add_child(inner);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Bump map over a nested BSDF. Without a connected height texture only the
/// nested BSDF is returned, carrying the id.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn bump(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let inner = nested_bsdf(ctx, node, "bsdf", true)?;
    let Some(path) = connected_texture(ctx, node, "texture")? else {
        warn!("Bump shader '{node}' has no texture; using its BSDF unchanged");
        return Ok(inner.map(|mut e| {
            if let Some(id) = id {
                e.set_attr("id", id);
            }
            Shader::Bsdf(e)
        }));
    };

    let scale = ctx.host.find_one_float(node, "bumpScale", 1.0);
    let scale = if scale != 1.0 { Some(scale) } else { None };
    let mut bsdf = Element::plugin("bsdf", "bumpmap", id)
        .with_child(Element::texture("texture", &path, scale));
    if let Some(inner) = inner {
        bsdf.add_child(inner);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}
