//! Conductors

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::presets::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// Returns the conductor preset, exterior index and specular reflectance.
fn conductor_params(ctx: &TranslateContext, node: &str) -> Result<Vec<Element>, String> {
    let label = ctx
        .host
        .find_one_string(node, "material", String::from("Copper"));
    Ok(vec![
        Element::string("material", CONDUCTOR_PRESETS.resolve(&label)),
        float_value(ctx, node, "extEta", 1.0),
        spectrum_param(
            ctx,
            node,
            "specularReflectance",
            Color::WHITE,
            ColorSpace::Srgb,
            None,
        )?,
    ])
}

/// Smooth conductor.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn conductor(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "conductor", id);
    for param in conductor_params(ctx, node)? {
        bsdf.add_child(param);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Rough conductor.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn rough_conductor(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "roughconductor", id);
    for param in distribution_params(ctx, node, "distribution", "alpha", true)? {
        bsdf.add_child(param);
    }
    for param in conductor_params(ctx, node)? {
        bsdf.add_child(param);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}
