//! Mixture and Blend Materials

use super::*;
use pbrt_core::common::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::texture::*;

/// Number of BSDF slots on a mixture shader.
pub const MIXTURE_SLOTS: usize = 4;

/// Linear combination of up to four BSDFs. Slots with a zero weight are left
/// out.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn mixture(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut weights: Vec<Float> = vec![];
    let mut bsdfs: Vec<Element> = vec![];
    for slot in 1..=MIXTURE_SLOTS {
        let weight = ctx.host.find_one_float(node, &format!("weight{slot}"), 0.0);
        if weight == 0.0 {
            continue;
        }
        if let Some(bsdf) = nested_bsdf(ctx, node, &format!("bsdf{slot}"), true)? {
            weights.push(weight);
            bsdfs.push(bsdf);
        }
    }
    if bsdfs.is_empty() {
        warn!("Mixture shader '{node}' has no weighted BSDF");
    }

    let mut bsdf = Element::plugin("bsdf", "mixturebsdf", id)
        .with_child(Element::string("weights", &join_floats(&weights)));
    for inner in bsdfs {
        bsdf.add_child(inner);
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}

/// Blend of two BSDFs by a scalar or textured weight.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn blend(ctx: &TranslateContext, node: &str, id: Option<&str>) -> Result<Option<Shader>, String> {
    let mut bsdf = Element::plugin("bsdf", "blendbsdf", id)
        .with_child(float_param(ctx, node, "weight", 0.5, None)?);
    for attr in ["bsdf1", "bsdf2"] {
        if let Some(inner) = nested_bsdf(ctx, node, attr, true)? {
            bsdf.add_child(inner);
        }
    }
    Ok(Some(Shader::Bsdf(bsdf)))
}
