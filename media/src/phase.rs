//! Phase Functions

use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::presets::*;

/// Returns the phase function element of a medium node. Henyey-Greenstein
/// carries its asymmetry `g` and micro-flake its fiber deviation `stddev`.
///
/// * `ctx`  - Translation context.
/// * `node` - Medium node.
pub fn phase_function(ctx: &TranslateContext, node: &str) -> Element {
    let label = ctx
        .host
        .find_one_string(node, "phaseFunction", String::from("Isotropic"));
    let kind = PHASE_PRESETS.resolve(&label);
    let phase = Element::plugin("phase", kind, None);
    match kind {
        "hg" => phase.with_child(Element::float(
            "g",
            ctx.host.find_one_float(node, "phaseFunctionHGG", 0.0),
        )),
        "microflake" => phase.with_child(Element::float(
            "stddev",
            ctx.host.find_one_float(node, "phaseFunctionMFSD", 0.05),
        )),
        _ => phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::host::*;
    use pbrt_core::settings::*;
    use std::path::Path;

    #[test]
    fn phase_parameters_follow_kind() {
        let mut host = MemoryHost::new();
        host.add_node("fog", "MitsubaHomogeneousParticipatingMedium")
            .set("phaseFunction", "Henyey-Greenstein")
            .set("phaseFunctionHGG", 0.7)
            .set("phaseFunctionMFSD", 0.2);
        let settings = RenderSettings::default();

        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        let p = phase_function(&ctx, "fog");
        assert_eq!(p.plugin_type(), Some("hg"));
        assert_eq!(p.value_of("g"), Some("0.7"));

        let mut host = host.clone();
        host.set_attr("fog", "phaseFunction", "Micro-Flake");
        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        let p = phase_function(&ctx, "fog");
        assert_eq!(p.plugin_type(), Some("microflake"));
        assert_eq!(p.value_of("stddev"), Some("0.2"));

        host.set_attr("fog", "phaseFunction", "Rayleigh");
        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        assert!(phase_function(&ctx, "fog").children.is_empty());
    }
}
