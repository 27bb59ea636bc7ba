//! Sun and Sky

use core::context::*;
use core::element::*;
use core::spectrum::*;
use core::texture::*;

/// Which parts of the daylight model are emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SunskyKind {
    Sun,
    Sky,
    SunSky,
}

impl SunskyKind {
    /// Returns the parts selected by the `useSun` and `useSky` toggles. With
    /// both off the combined model is used.
    ///
    /// * `ctx`  - Translation context.
    /// * `node` - Sun and sky node.
    pub fn from_node(ctx: &TranslateContext, node: &str) -> Self {
        let sun = ctx.host.find_one_bool(node, "useSun", true);
        let sky = ctx.host.find_one_bool(node, "useSky", true);
        match (sun, sky) {
            (true, true) => Self::SunSky,
            (true, false) => Self::Sun,
            (false, true) => Self::Sky,
            (false, false) => {
                warn!("Sun and sky '{node}' has neither sun nor sky enabled; using both");
                Self::SunSky
            }
        }
    }

    /// Returns the plugin name.
    pub fn plugin(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Sky => "sky",
            Self::SunSky => "sunsky",
        }
    }

    fn has_sky(&self) -> bool {
        *self != Self::Sun
    }

    fn has_sun(&self) -> bool {
        *self != Self::Sky
    }
}

/// Returns a `sun`, `sky` or `sunsky` emitter.
///
/// * `ctx`  - Translation context.
/// * `node` - Sun and sky node.
pub fn sunsky_light(ctx: &TranslateContext, node: &str) -> Element {
    let kind = SunskyKind::from_node(ctx, node);
    let host = ctx.host;
    let int = |attr: &str, default| Element::integer(attr, host.find_one_int(node, attr, default));

    let mut emitter = Element::plugin("emitter", kind.plugin(), None)
        .with_child(float_value(ctx, node, "turbidity", 3.0));
    if kind.has_sky() {
        emitter.add_child(Element::rgb(
            "albedo",
            &host.find_one_color(node, "albedo", Color::grey(0.15)),
        ));
    }
    emitter.add_child(int("year", 2010));
    emitter.add_child(int("month", 7));
    emitter.add_child(int("day", 10));
    emitter.add_child(float_value(ctx, node, "hour", 15.0));
    emitter.add_child(float_value(ctx, node, "minute", 0.0));
    emitter.add_child(float_value(ctx, node, "second", 0.0));
    emitter.add_child(float_value(ctx, node, "latitude", 35.6894));
    emitter.add_child(float_value(ctx, node, "longitude", 139.6917));
    emitter.add_child(float_value(ctx, node, "timezone", 9.0));
    if kind.has_sky() {
        emitter.add_child(float_value(ctx, node, "stretch", 1.0));
    }
    emitter.add_child(int("resolutionX", 512));
    emitter.add_child(int("resolutionY", 256));
    if kind.has_sun() {
        emitter.add_child(float_value(ctx, node, "sunScale", 1.0));
    }
    if kind.has_sky() {
        emitter.add_child(float_value(ctx, node, "skyScale", 1.0));
    }
    if kind.has_sun() {
        emitter.add_child(float_value(ctx, node, "sunRadiusScale", 1.0));
    }
    emitter
}
