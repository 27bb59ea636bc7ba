//! Subsurface Scattering

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;
use media::*;

/// Dipole subsurface scattering with a rough plastic surface BSDF. The BSDF
/// is left out in single scattering mode. Both are inlined in the shape so
/// the id is unused.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `_id`  - Unused.
pub fn sss_dipole(ctx: &TranslateContext, node: &str, _id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut subsurface = Element::plugin("subsurface", "dipole", None);
    for param in scattering_params(ctx, node)? {
        subsurface.add_child(param);
    }
    subsurface.add_child(float_value(ctx, node, "scale", 1.0));
    for param in ior_params(ctx, node) {
        subsurface.add_child(param);
    }
    subsurface.add_child(Element::integer(
        "irrSamples",
        ctx.host.find_one_int(node, "irrSamples", 16),
    ));

    let bsdf = if ctx.host.find_one_bool(node, "singleScatteringOnly", false) {
        None
    } else {
        let mut bsdf = Element::plugin("bsdf", "roughplastic", None);
        for param in distribution_params(ctx, node, "surfaceDistribution", "surfaceAlpha", false)? {
            bsdf.add_child(param);
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
            "diffuseReflectance",
            Color::BLACK,
            ColorSpace::Srgb,
            None,
        )?);
        Some(bsdf)
    };

    Ok(Some(Shader::Subsurface { subsurface, bsdf }))
}
