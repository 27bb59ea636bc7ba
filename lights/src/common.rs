//! Common

use super::*;
use core::common::*;
use core::context::*;
use core::element::*;
use core::host::*;
use core::spectrum::*;

/// Node kind of host directional lights.
pub const DIRECTIONAL_LIGHT_KIND: &str = "directionalLight";

/// Node kind of host point lights.
pub const POINT_LIGHT_KIND: &str = "pointLight";

/// Node kind of host spot lights.
pub const SPOT_LIGHT_KIND: &str = "spotLight";

/// Node kind of the sun and sky light.
pub const SUNSKY_KIND: &str = "MitsubaSunsky";

/// Node kind of the environment light.
pub const ENVIRONMENT_LIGHT_KIND: &str = "MitsubaEnvironmentLight";

/// Returns `intensity × color` of a standard light as a linear colour.
///
/// * `ctx`  - Translation context.
/// * `node` - Light node.
/// * `name` - Element name.
pub fn light_power(ctx: &TranslateContext, node: &str, name: &str) -> Element {
    let intensity = ctx.host.find_one_float(node, "intensity", 1.0);
    let color = ctx.host.find_one_color(node, "color", Color::WHITE);
    Element::rgb(name, &(color * intensity))
}

/// Returns a `<rotate>` element about one axis.
///
/// * `axis`  - Axis name (`x`, `y` or `z`).
/// * `angle` - Angle in degrees.
pub fn rotate(axis: &str, angle: Float) -> Element {
    Element::new("rotate")
        .with_attr(axis, "1")
        .with_attr("angle", &format_float(angle))
}

/// Returns the visible nodes of a kind.
fn visible_of_kind(ctx: &TranslateContext, kind: &str) -> Vec<String> {
    ctx.host
        .list_of_kind(kind)
        .into_iter()
        .filter(|n| {
            let visible = is_visible(ctx.host, n);
            if !visible {
                debug!("Skipping hidden light '{n}'");
            }
            visible
        })
        .collect()
}

/// Returns the visible lights of a category that may appear at most once.
/// More than one is reported and none of them is used.
fn unique_of_kind(ctx: &TranslateContext, kind: &str) -> Option<String> {
    let mut lights = visible_of_kind(ctx, kind);
    if lights.len() > 1 {
        warn!(
            "Only one {kind} is allowed but found {}; none will be rendered",
            lights.len()
        );
        return None;
    }
    lights.pop()
}

/// Returns the emitters of the scene: standard lights, then the sun and sky,
/// then the environment.
///
/// * `ctx` - Translation context.
pub fn make_lights(ctx: &TranslateContext) -> Result<Vec<Element>, String> {
    let mut emitters = vec![];

    for light in visible_of_kind(ctx, DIRECTIONAL_LIGHT_KIND) {
        emitters.push(directional_light(ctx, &light)?);
    }
    for light in visible_of_kind(ctx, POINT_LIGHT_KIND) {
        emitters.push(point_light(ctx, &light)?);
    }
    for light in visible_of_kind(ctx, SPOT_LIGHT_KIND) {
        emitters.push(spot_light(ctx, &light)?);
    }

    if let Some(light) = unique_of_kind(ctx, SUNSKY_KIND) {
        emitters.push(sunsky_light(ctx, &light));
    }
    if let Some(light) = unique_of_kind(ctx, ENVIRONMENT_LIGHT_KIND) {
        emitters.push(environment_light(ctx, &light)?);
    }

    Ok(emitters)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::settings::*;
    use std::path::Path;

    /// Runs `f` with a context over the scene.
    pub fn with_ctx<R>(host: &MemoryHost, f: impl FnOnce(&TranslateContext) -> R) -> R {
        let settings = RenderSettings::default();
        let ctx = TranslateContext::new(host, &settings, Path::new("."));
        f(&ctx)
    }

    #[test]
    fn lights_in_category_order() {
        let mut host = MemoryHost::new();
        host.add_node("env", ENVIRONMENT_LIGHT_KIND);
        host.add_node("spot", SPOT_LIGHT_KIND);
        host.add_node("sky", SUNSKY_KIND);
        host.add_node("pt", POINT_LIGHT_KIND);
        host.add_node("sun", DIRECTIONAL_LIGHT_KIND);
        let lights = with_ctx(&host, |ctx| make_lights(ctx).unwrap());
        let kinds: Vec<&str> = lights.iter().filter_map(|e| e.plugin_type()).collect();
        assert_eq!(kinds, vec!["directional", "point", "spot", "sunsky", "constant"]);
    }

    #[test]
    fn two_environments_emit_none() {
        let mut host = MemoryHost::new();
        host.add_node("env1", ENVIRONMENT_LIGHT_KIND);
        host.add_node("env2", ENVIRONMENT_LIGHT_KIND);
        host.add_node("pt", POINT_LIGHT_KIND);
        let lights = with_ctx(&host, |ctx| make_lights(ctx).unwrap());
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].plugin_type(), Some("point"));
    }

    #[test]
    fn hidden_lights_are_skipped() {
        let mut host = MemoryHost::new();
        host.add_node("grp", "transform").set("visibility", false);
        host.add_node("pt", POINT_LIGHT_KIND).parent("grp");
        host.add_node("pt2", POINT_LIGHT_KIND);
        let lights = with_ctx(&host, |ctx| make_lights(ctx).unwrap());
        assert_eq!(lights.len(), 1);
    }

    #[test]
    fn power_is_intensity_times_color() {
        let mut host = MemoryHost::new();
        host.add_node("pt", POINT_LIGHT_KIND)
            .set("intensity", 2.0)
            .set("color", Color::new(0.5, 0.25, 1.0));
        let e = with_ctx(&host, |ctx| light_power(ctx, "pt", "intensity"));
        assert_eq!(e.attr("value"), Some("1 0.5 2"));
    }
}
