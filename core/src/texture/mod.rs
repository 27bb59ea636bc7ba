//! Parameter Resolver
//!
//! Shader inputs are either driven by a file texture node or hold a constant
//! value. These functions pick the matching element for an input.

use crate::common::*;
use crate::context::*;
use crate::element::*;
use crate::host::*;
use crate::spectrum::*;

/// Node kind of the host's file texture.
pub const FILE_TEXTURE_KIND: &str = "file";

/// Replaces the penultimate `.` delimited token of a path with the frame
/// number padded to 4 digits. Paths with fewer than 2 tokens are unchanged.
///
/// * `path`  - Texture path, e.g. `"tex/wood.0001.png"`.
/// * `frame` - Frame number.
pub fn substitute_frame(path: &str, frame: Int) -> String {
    let mut tokens: Vec<String> = path.split('.').map(String::from).collect();
    let n = tokens.len();
    if n < 2 {
        return path.to_string();
    }
    tokens[n - 2] = pad_frame(frame);
    tokens.join(".")
}

/// Returns the image path of a file texture node or `None` if it has no
/// image. Animated textures have the frame substituted.
///
/// * `ctx`  - Translation context.
/// * `file` - File texture node.
pub fn texture_path(ctx: &TranslateContext, file: &str) -> Option<String> {
    let path = ctx.host.find_one_string(file, "fileTextureName", String::new());
    if path.is_empty() {
        warn!("File texture '{file}' has no image");
        return None;
    }
    if ctx.host.find_one_bool(file, "useFrameExtension", false) {
        let frame = ctx.host.find_one_int(file, "frameExtension", ctx.frame());
        Some(substitute_frame(&path, frame))
    } else {
        Some(path)
    }
}

/// Returns the image path of the file texture connected to a shader input.
///
/// * `ctx`  - Translation context.
/// * `node` - Shader node.
/// * `attr` - Shader input.
pub fn connected_texture(
    ctx: &TranslateContext,
    node: &str,
    attr: &str,
) -> Result<Option<String>, String> {
    Ok(connected_node(ctx.host, node, attr, &[FILE_TEXTURE_KIND])?
        .and_then(|file| texture_path(ctx, &file)))
}

/// Returns a bitmap texture for a textured input or a colour constant.
///
/// * `ctx`     - Translation context.
/// * `node`    - Shader node.
/// * `attr`    - Shader input, also used as the element name.
/// * `default` - Value if the input is neither textured nor set.
/// * `space`   - Colour space of the constant.
/// * `scale`   - Optional texture scale.
pub fn spectrum_param(
    ctx: &TranslateContext,
    node: &str,
    attr: &str,
    default: Color,
    space: ColorSpace,
    scale: Option<Float>,
) -> Result<Element, String> {
    match connected_texture(ctx, node, attr)? {
        Some(path) => Ok(Element::texture(attr, &path, scale)),
        None => Ok(Element::color(
            attr,
            &ctx.host.find_one_color(node, attr, default),
            space,
        )),
    }
}

/// Returns a bitmap texture for a textured input or a float constant.
///
/// * `ctx`     - Translation context.
/// * `node`    - Shader node.
/// * `attr`    - Shader input.
/// * `default` - Value if the input is neither textured nor set.
/// * `scale`   - Optional texture scale.
pub fn float_param(
    ctx: &TranslateContext,
    node: &str,
    attr: &str,
    default: Float,
    scale: Option<Float>,
) -> Result<Element, String> {
    match connected_texture(ctx, node, attr)? {
        Some(path) => Ok(Element::texture(attr, &path, scale)),
        None => Ok(Element::float(
            attr,
            ctx.host.find_one_float(node, attr, default),
        )),
    }
}

/// Returns a float constant named after the input.
pub fn float_value(ctx: &TranslateContext, node: &str, attr: &str, default: Float) -> Element {
    Element::float(attr, ctx.host.find_one_float(node, attr, default))
}

/// Returns a boolean constant named after the input.
pub fn bool_value(ctx: &TranslateContext, node: &str, attr: &str, default: bool) -> Element {
    Element::boolean(attr, ctx.host.find_one_bool(node, attr, default))
}

/// Returns a colour constant named after the input.
pub fn color_value(
    ctx: &TranslateContext,
    node: &str,
    attr: &str,
    default: Color,
    space: ColorSpace,
) -> Element {
    Element::color(attr, &ctx.host.find_one_color(node, attr, default), space)
}

/// Returns a grid volume for a textured input or a constant volume.
///
/// * `ctx`     - Translation context.
/// * `node`    - Medium node.
/// * `attr`    - Medium input, also used as the element name.
/// * `default` - Value if the input is neither textured nor set.
pub fn volume_param(
    ctx: &TranslateContext,
    node: &str,
    attr: &str,
    default: Color,
) -> Result<Element, String> {
    match connected_texture(ctx, node, attr)? {
        Some(path) => Ok(Element::volume(attr, &path)),
        None => Ok(Element::plugin("volume", "constvolume", None)
            .with_attr("name", attr)
            .with_child(Element::rgb(
                "value",
                &ctx.host.find_one_color(node, attr, default),
            ))),
    }
}
