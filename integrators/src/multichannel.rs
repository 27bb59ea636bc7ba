//! Multichannel Integrator

use pbrt_core::element::*;
use pbrt_core::film::*;

/// Wraps an integrator in a `multichannel` integrator with one `field`
/// integrator per channel.
///
/// * `channels`   - Extra channels.
/// * `integrator` - Integrator for the base image.
pub fn wrap_multichannel(channels: Channels, integrator: Element) -> Element {
    let mut multichannel = Element::plugin("integrator", "multichannel", None).with_child(integrator);
    for field in channels.fields() {
        multichannel.add_child(
            Element::plugin("integrator", "field", None).with_child(Element::string("field", field)),
        );
    }
    multichannel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_channel_order() {
        let channels = Channels::PRIM_INDEX | Channels::POSITION | Channels::UV;
        let e = wrap_multichannel(channels, Element::plugin("integrator", "path", None));
        let fields: Vec<&str> = e.children[1..]
            .iter()
            .filter_map(|c| c.value_of("field"))
            .collect();
        assert_eq!(fields, vec!["position", "uv", "primIndex"]);
        assert_eq!(e.children[0].plugin_type(), Some("path"));
    }
}
