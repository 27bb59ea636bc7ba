//! Medium Shaders

use super::*;
use pbrt_core::context::*;
use media::*;

/// Homogeneous participating medium.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn medium_homogeneous(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    Ok(Some(Shader::Medium(homogeneous_medium(ctx, node, id)?)))
}

/// Heterogeneous participating medium backed by a grid volume file.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Optional id.
pub fn medium_heterogeneous(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    Ok(heterogeneous_medium(ctx, node, id)?.map(Shader::Medium))
}
