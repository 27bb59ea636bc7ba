//! Shader Dispatch

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::host::*;
use pbrt_core::presets::*;
use pbrt_core::spectrum::*;
use pbrt_core::texture::*;
use std::collections::HashMap;

/// The closed set of shader kinds the translator understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    SmoothCoating,
    Conductor,
    Dielectric,
    DiffuseTransmitter,
    Diffuse,
    Phong,
    Plastic,
    RoughCoating,
    RoughConductor,
    RoughDielectric,
    RoughDiffuse,
    RoughPlastic,
    ThinDielectric,
    Ward,
    Irawan,
    ObjectAreaLight,
    TwoSided,
    Mixture,
    Blend,
    Mask,
    Bump,
    Hk,
    SssDipole,
    MediumHomogeneous,
    MediumHeterogeneous,
}

/// Translates one shader node. The id is only used for named definitions.
pub type ShaderWriter = fn(&TranslateContext, &str, Option<&str>) -> Result<Option<Shader>, String>;

lazy_static! {
    /// Host node kinds mapped to shader kinds.
    static ref SHADER_KINDS: HashMap<&'static str, ShaderKind> = ShaderKind::ALL
        .iter()
        .map(|k| (k.node_kind(), *k))
        .collect();
}

impl ShaderKind {
    /// All shader kinds.
    pub const ALL: [ShaderKind; 25] = [
        Self::SmoothCoating,
        Self::Conductor,
        Self::Dielectric,
        Self::DiffuseTransmitter,
        Self::Diffuse,
        Self::Phong,
        Self::Plastic,
        Self::RoughCoating,
        Self::RoughConductor,
        Self::RoughDielectric,
        Self::RoughDiffuse,
        Self::RoughPlastic,
        Self::ThinDielectric,
        Self::Ward,
        Self::Irawan,
        Self::ObjectAreaLight,
        Self::TwoSided,
        Self::Mixture,
        Self::Blend,
        Self::Mask,
        Self::Bump,
        Self::Hk,
        Self::SssDipole,
        Self::MediumHomogeneous,
        Self::MediumHeterogeneous,
    ];

    /// Returns the shader kind of a host node kind.
    ///
    /// * `node_kind` - Host node kind.
    pub fn from_node_kind(node_kind: &str) -> Option<Self> {
        SHADER_KINDS.get(node_kind).copied()
    }

    /// Returns the host node kind.
    pub fn node_kind(&self) -> &'static str {
        match self {
            Self::SmoothCoating => "MitsubaSmoothCoatingShader",
            Self::Conductor => "MitsubaConductorShader",
            Self::Dielectric => "MitsubaDielectricShader",
            Self::DiffuseTransmitter => "MitsubaDiffuseTransmitterShader",
            Self::Diffuse => "MitsubaDiffuseShader",
            Self::Phong => "MitsubaPhongShader",
            Self::Plastic => "MitsubaPlasticShader",
            Self::RoughCoating => "MitsubaRoughCoatingShader",
            Self::RoughConductor => "MitsubaRoughConductorShader",
            Self::RoughDielectric => "MitsubaRoughDielectricShader",
            Self::RoughDiffuse => "MitsubaRoughDiffuseShader",
            Self::RoughPlastic => "MitsubaRoughPlasticShader",
            Self::ThinDielectric => "MitsubaThinDielectricShader",
            Self::Ward => "MitsubaWardShader",
            Self::Irawan => "MitsubaIrawanShader",
            Self::ObjectAreaLight => "MitsubaObjectAreaLightShader",
            Self::TwoSided => "MitsubaTwoSidedShader",
            Self::Mixture => "MitsubaMixtureShader",
            Self::Blend => "MitsubaBlendShader",
            Self::Mask => "MitsubaMaskShader",
            Self::Bump => "MitsubaBumpShader",
            Self::Hk => "MitsubaHKShader",
            Self::SssDipole => "MitsubaSSSDipoleShader",
            Self::MediumHomogeneous => "MitsubaHomogeneousParticipatingMedium",
            Self::MediumHeterogeneous => "MitsubaHeterogeneousParticipatingMedium",
        }
    }

    /// Returns the writer for the kind.
    pub fn writer(&self) -> ShaderWriter {
        match self {
            Self::SmoothCoating => coating,
            Self::Conductor => conductor,
            Self::Dielectric => dielectric,
            Self::DiffuseTransmitter => diffuse_transmitter,
            Self::Diffuse => diffuse,
            Self::Phong => phong,
            Self::Plastic => plastic,
            Self::RoughCoating => rough_coating,
            Self::RoughConductor => rough_conductor,
            Self::RoughDielectric => rough_dielectric,
            Self::RoughDiffuse => rough_diffuse,
            Self::RoughPlastic => rough_plastic,
            Self::ThinDielectric => thin_dielectric,
            Self::Ward => ward,
            Self::Irawan => irawan,
            Self::ObjectAreaLight => area_light,
            Self::TwoSided => two_sided,
            Self::Mixture => mixture,
            Self::Blend => blend,
            Self::Mask => mask,
            Self::Bump => bump,
            Self::Hk => hk,
            Self::SssDipole => sss_dipole,
            Self::MediumHomogeneous => medium_homogeneous,
            Self::MediumHeterogeneous => medium_heterogeneous,
        }
    }

    /// Returns true for kinds that produce a surface BSDF and may be nested
    /// inside other BSDFs.
    pub fn is_bsdf(&self) -> bool {
        !matches!(
            self,
            Self::ObjectAreaLight
                | Self::SssDipole
                | Self::MediumHomogeneous
                | Self::MediumHeterogeneous
        )
    }

    /// Returns true for participating media.
    pub fn is_medium(&self) -> bool {
        matches!(self, Self::MediumHomogeneous | Self::MediumHeterogeneous)
    }
}

/// A translated shader.
#[derive(Clone, Debug, PartialEq)]
pub enum Shader {
    /// A surface BSDF.
    Bsdf(Element),

    /// An area emitter attached to the shape.
    Emitter(Element),

    /// A subsurface integrator and the optional surface BSDF over it.
    Subsurface {
        subsurface: Element,
        bsdf: Option<Element>,
    },

    /// A participating medium.
    Medium(Element),
}

/// Translates a shader node. Unsupported kinds are reported and yield `None`.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `id`   - Id of a named definition or `None` for inlined shaders.
pub fn translate_shader(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Shader>, String> {
    let node_kind = ctx.host.node_kind(node)?;
    let Some(kind) = ShaderKind::from_node_kind(&node_kind) else {
        warn!("Unsupported shader '{node}' of kind '{node_kind}'; skipping");
        return Ok(None);
    };
    debug!("Translating {kind:?} shader '{node}'");

    ctx.enter_shader(node)?;
    let shader = kind.writer()(ctx, node, id);
    ctx.leave_shader();

    match shader? {
        Some(Shader::Bsdf(bsdf))
            if kind != ShaderKind::TwoSided && ctx.host.find_one_bool(node, "twosided", false) =>
        {
            Ok(Some(Shader::Bsdf(wrap_two_sided(bsdf, id))))
        }
        shader => Ok(shader),
    }
}

/// Wraps a BSDF in a `twosided` BSDF carrying the id. The inner BSDF is
/// renamed `<id>InnerMaterial`.
///
/// * `inner` - The one-sided BSDF.
/// * `id`    - Id of the wrapper.
pub fn wrap_two_sided(mut inner: Element, id: Option<&str>) -> Element {
    match id {
        Some(id) => inner.set_attr("id", &format!("{id}InnerMaterial")),
        None => {
            inner.remove_attr("id");
        }
    }
    Element::plugin("bsdf", "twosided", id).with_child(inner)
}

/// Returns the BSDF connected to a shader input, translated and inlined
/// without ids. Without a connected BSDF `fallback` decides whether a
/// `diffuse` BSDF using the input's own colour is returned.
///
/// * `ctx`      - Translation context.
/// * `node`     - Parent shader node.
/// * `attr`     - Shader input.
/// * `fallback` - Return a diffuse BSDF when nothing is connected.
pub fn nested_bsdf(
    ctx: &TranslateContext,
    node: &str,
    attr: &str,
    fallback: bool,
) -> Result<Option<Element>, String> {
    for other in connections_to(ctx.host, node, attr)? {
        let is_bsdf = ShaderKind::from_node_kind(&ctx.host.node_kind(&other)?)
            .map_or(false, |k| k.is_bsdf());
        if !is_bsdf {
            continue;
        }
        if let Some(Shader::Bsdf(mut bsdf)) = translate_shader(ctx, &other, None)? {
            bsdf.strip_ids();
            return Ok(Some(bsdf));
        }
    }

    if fallback {
        Ok(Some(Element::plugin("bsdf", "diffuse", None).with_child(
            color_value(ctx, node, attr, Color::grey(0.5), ColorSpace::Srgb)
                .with_attr("name", "reflectance"),
        )))
    } else {
        Ok(None)
    }
}

/// Returns an index of refraction: a named preset when the UI label is a
/// known medium, else the numeric `<attr>Value`.
///
/// * `ctx`     - Translation context.
/// * `node`    - Shader node.
/// * `attr`    - IOR input (`intIOR` or `extIOR`).
/// * `default` - Numeric default.
pub fn ior_param(ctx: &TranslateContext, node: &str, attr: &str, default: f32) -> Element {
    let label = ctx.host.find_one_string(node, attr, String::new());
    match IOR_PRESETS.get(ior_key(&label)) {
        Some(preset) => Element::string(attr, preset),
        None => Element::float(
            attr,
            ctx.host.find_one_float(node, &format!("{attr}Value"), default),
        ),
    }
}

/// Interior IOR defaults to BK7.
pub const DEFAULT_INT_IOR: f32 = 1.5046;

/// Exterior IOR defaults to air.
pub const DEFAULT_EXT_IOR: f32 = 1.000277;

/// Returns the `intIOR` and `extIOR` elements of a shader.
pub fn ior_params(ctx: &TranslateContext, node: &str) -> [Element; 2] {
    [
        ior_param(ctx, node, "intIOR", DEFAULT_INT_IOR),
        ior_param(ctx, node, "extIOR", DEFAULT_EXT_IOR),
    ]
}

/// Returns the microfacet distribution and its roughness elements. The
/// anisotropic distribution has `alphaU`/`alphaV`, the others `alpha`.
///
/// * `ctx`         - Translation context.
/// * `node`        - Shader node.
/// * `attr`        - Distribution input.
/// * `alpha_attr`  - Roughness input for isotropic distributions.
/// * `anisotropic` - The BSDF supports the anisotropic distribution.
pub fn distribution_params(
    ctx: &TranslateContext,
    node: &str,
    attr: &str,
    alpha_attr: &str,
    anisotropic: bool,
) -> Result<Vec<Element>, String> {
    let label = ctx.host.find_one_string(node, attr, String::from("Beckmann"));
    let mut dist = DISTRIBUTION_PRESETS.resolve(&label);
    if dist == "as" && !anisotropic {
        warn!("Shader '{node}' does not support anisotropic roughness; using 'beckmann'");
        dist = "beckmann";
    }

    let mut params = vec![Element::string("distribution", dist)];
    if dist == "as" {
        params.push(float_param(ctx, node, "alphaU", 0.1, None)?);
        params.push(float_param(ctx, node, "alphaV", 0.1, None)?);
    } else {
        let mut alpha = float_param(ctx, node, alpha_attr, 0.1, None)?;
        alpha.set_attr("name", "alpha");
        params.push(alpha);
    }
    Ok(params)
}
