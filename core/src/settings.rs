//! Render Settings

use crate::common::*;
use crate::host::*;
use crate::paramset::*;

/// Node kind of the host's render settings node.
pub const RENDER_SETTINGS_KIND: &str = "MitsubaRenderSettings";

/// Snapshot of the render settings for one frame. Builders read from it with
/// the `find_one_*` functions and never write back.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Render settings attributes.
    pub params: ParamSet,

    /// The frame being translated.
    pub frame: Int,

    /// Image width in pixels.
    pub width: Int,

    /// Image height in pixels.
    pub height: Int,
}

impl RenderSettings {
    /// Create render settings from a parameter set.
    ///
    /// * `params`     - Render settings attributes.
    /// * `frame`      - The frame being translated.
    /// * `resolution` - Image `(width, height)`.
    pub fn new(params: ParamSet, frame: Int, resolution: (Int, Int)) -> Self {
        Self {
            params,
            frame,
            width: resolution.0,
            height: resolution.1,
        }
    }

    /// Snapshot the first render settings node of the host scene. Defaults
    /// are used for everything when the scene has no such node.
    ///
    /// * `host` - The scene.
    pub fn from_host(host: &dyn SceneQuery) -> Self {
        let params = match host.list_of_kind(RENDER_SETTINGS_KIND).first() {
            Some(node) => {
                debug!("Reading render settings from '{node}'");
                host.node_params(node)
            }
            None => {
                warn!("No {RENDER_SETTINGS_KIND} node found; using defaults");
                ParamSet::new()
            }
        };
        Self::new(params, host.current_frame(), host.render_resolution())
    }

    /// Finds a boolean setting.
    pub fn find_one_bool(&self, name: &str, default: bool) -> bool {
        self.params.find_one_bool(name, default)
    }

    /// Finds an integer setting.
    pub fn find_one_int(&self, name: &str, default: Int) -> Int {
        self.params.find_one_int(name, default)
    }

    /// Finds a float setting.
    pub fn find_one_float(&self, name: &str, default: Float) -> Float {
        self.params.find_one_float(name, default)
    }

    /// Finds a string setting.
    pub fn find_one_string(&self, name: &str, default: &str) -> String {
        self.params.find_one_string(name, String::from(default))
    }

    /// Returns true if render data should be kept after rendering.
    pub fn keep_temp_files(&self) -> bool {
        self.find_one_bool("keepTempFiles", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_settings_node() {
        let mut host = MemoryHost::new();
        host.set_resolution(320, 240);
        host.add_node("defaultMitsubaRenderSettings", RENDER_SETTINGS_KIND)
            .set("integrator", "Path Tracer")
            .set("sampleCount", 16)
            .set("keepTempFiles", true);
        host.set_frame(7).unwrap();

        let settings = RenderSettings::from_host(&host);
        assert_eq!(settings.frame, 7);
        assert_eq!((settings.width, settings.height), (320, 240));
        assert_eq!(settings.find_one_string("integrator", "x"), "Path Tracer");
        assert_eq!(settings.find_one_int("sampleCount", 4), 16);
        assert!(settings.keep_temp_files());
    }

    #[test]
    fn missing_node_uses_defaults() {
        let host = MemoryHost::new();
        let settings = RenderSettings::from_host(&host);
        assert_eq!(settings.find_one_int("sampleCount", 4), 4);
        assert!(!settings.keep_temp_files());
    }
}
