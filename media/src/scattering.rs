//! Scattering Coefficients

use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::host::*;
use pbrt_core::presets::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;

/// How the scattering coefficients of a medium are given.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScatteringMode {
    /// Scattering and absorption coefficients `sigmaS` and `sigmaA`.
    SigmaSA,

    /// Extinction coefficient `sigmaT` and single scattering `albedo`.
    SigmaTAlbedo,

    /// A measured medium preset named by `material`.
    Preset,
}

impl ScatteringMode {
    /// Returns the mode selected on a node. `useSigmaSA` wins when both
    /// `useSigmaSA` and `useSigmaTAlbedo` are set.
    ///
    /// * `host` - The scene.
    /// * `node` - Medium or subsurface node.
    pub fn from_node(host: &dyn SceneQuery, node: &str) -> Self {
        if host.find_one_bool(node, "useSigmaSA", false) {
            Self::SigmaSA
        } else if host.find_one_bool(node, "useSigmaTAlbedo", false) {
            Self::SigmaTAlbedo
        } else {
            Self::Preset
        }
    }
}

/// Returns the scattering coefficient elements of a node for its mode.
///
/// * `ctx`  - Translation context.
/// * `node` - Medium or subsurface node.
pub fn scattering_params(ctx: &TranslateContext, node: &str) -> Result<Vec<Element>, String> {
    let params = match ScatteringMode::from_node(ctx.host, node) {
        ScatteringMode::SigmaSA => vec![
            spectrum_param(ctx, node, "sigmaS", Color::grey(1.0), ColorSpace::Linear, None)?,
            spectrum_param(ctx, node, "sigmaA", Color::grey(0.05), ColorSpace::Linear, None)?,
        ],
        ScatteringMode::SigmaTAlbedo => vec![
            spectrum_param(ctx, node, "sigmaT", Color::grey(1.0), ColorSpace::Linear, None)?,
            spectrum_param(ctx, node, "albedo", Color::grey(0.95), ColorSpace::Linear, None)?,
        ],
        ScatteringMode::Preset => {
            let label = ctx.host.find_one_string(node, "material", String::new());
            vec![Element::string("material", MEDIUM_PRESETS.resolve(&label))]
        }
    };
    Ok(params)
}
