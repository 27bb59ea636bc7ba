//! Environment Light

use super::*;
use core::context::*;
use core::element::*;
use core::fileutil::*;
use core::geometry::*;
use core::spectrum::*;
use core::texture::*;

/// Image formats accepted for environment maps.
pub const ENVMAP_EXTENSIONS: [&str; 2] = ["hdr", "exr"];

/// Returns an `envmap` emitter when an HDR image drives the light's `source`,
/// otherwise a `constant` emitter with the source colour.
///
/// * `ctx`  - Translation context.
/// * `node` - Environment light node.
pub fn environment_light(ctx: &TranslateContext, node: &str) -> Result<Element, String> {
    match connected_texture(ctx, node, "source")? {
        Some(path) if has_extension(&path, &ENVMAP_EXTENSIONS) => Ok(envmap(ctx, node, &path)),
        Some(path) => {
            warn!("Environment image '{path}' is not HDR or EXR; using a constant environment");
            Ok(constant_environment(ctx, node))
        }
        None => Ok(constant_environment(ctx, node)),
    }
}

fn envmap(ctx: &TranslateContext, node: &str, path: &str) -> Element {
    let r = ctx.host.find_one_vector3f(node, "rotate", Vector3f::ZERO);
    let to_world = Element::new("transform")
        .with_attr("name", "toWorld")
        .with_child(rotate("x", r.x))
        .with_child(rotate("y", r.y))
        .with_child(rotate("z", r.z));

    Element::plugin("emitter", "envmap", None)
        .with_child(Element::string("filename", path))
        .with_child(float_value(ctx, node, "scale", 1.0))
        .with_child(float_value(ctx, node, "gamma", 1.0))
        .with_child(bool_value(ctx, node, "cache", false))
        .with_child(float_value(ctx, node, "samplingWeight", 1.0))
        .with_child(to_world)
}

fn constant_environment(ctx: &TranslateContext, node: &str) -> Element {
    let source = ctx.host.find_one_color(node, "source", Color::grey(0.5));
    Element::plugin("emitter", "constant", None)
        .with_child(Element::rgb("radiance", &source))
        .with_child(Element::float(
            "samplingWeight",
            ctx.host.find_one_float(node, "samplingWeight", 1.0),
        ))
}
