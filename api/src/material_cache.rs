//! Material Cache

use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::fileutil::*;
use pbrt_core::host::*;
use materials::*;
use shapes::*;
use std::collections::{HashMap, HashSet};

/// Suffix given to the one-sided BSDF inside a two-sided wrapper.
const INNER_MATERIAL_SUFFIX: &str = "InnerMaterial";

/// How a translated shader node is attached to shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum MaterialInstance {
    /// A named BSDF definition.
    Bsdf(String),

    /// A named medium definition.
    Medium(String),

    /// Elements copied into every shape using the shader.
    Inline(Vec<Element>),

    /// Nothing is attached.
    Unsupported,
}

/// Translates each shader node once and keeps the named definitions in first
/// use order.
#[derive(Default)]
pub struct MaterialCache {
    /// Translated shader nodes.
    instances: HashMap<String, MaterialInstance>,

    /// Ids already defined in the document.
    ids: HashSet<String>,

    /// Named definitions in first use order.
    definitions: Vec<Element>,
}

impl MaterialCache {
    /// Returns an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the named definitions in first use order.
    pub fn definitions(&self) -> &[Element] {
        &self.definitions
    }

    /// Consumes the cache returning the named definitions.
    pub fn into_definitions(self) -> Vec<Element> {
        self.definitions
    }

    /// Returns an id for a shader node that collides with no id in the
    /// document, including the id of a possible two-sided inner BSDF.
    fn unique_id(&self, node: &str) -> String {
        let base = sanitize_name(node);
        let free = |id: &str| {
            !self.ids.contains(id) && !self.ids.contains(&format!("{id}{INNER_MATERIAL_SUFFIX}"))
        };
        if free(&base) {
            return base;
        }
        (1..)
            .map(|i| format!("{base}_{i}"))
            .find(|id| free(id))
            .unwrap_or(base)
    }

    /// Records a definition and every id it declares.
    fn define(&mut self, definition: Element) {
        for e in definition.descendants() {
            if let Some(id) = e.id() {
                self.ids.insert(id.to_string());
            }
        }
        self.definitions.push(definition);
    }

    /// Translates a shader node on first use and returns its attachment.
    ///
    /// * `ctx`  - Translation context.
    /// * `node` - Shader node.
    pub fn instance(&mut self, ctx: &TranslateContext, node: &str) -> Result<MaterialInstance, String> {
        if let Some(instance) = self.instances.get(node) {
            return Ok(instance.clone());
        }

        let id = self.unique_id(node);
        let instance = match translate_shader(ctx, node, Some(&id))? {
            Some(Shader::Bsdf(bsdf)) => {
                self.define(bsdf);
                MaterialInstance::Bsdf(id)
            }
            Some(Shader::Medium(medium)) => {
                self.define(medium);
                MaterialInstance::Medium(id)
            }
            Some(Shader::Emitter(emitter)) => MaterialInstance::Inline(vec![emitter]),
            Some(Shader::Subsurface { subsurface, bsdf }) => {
                MaterialInstance::Inline(std::iter::once(subsurface).chain(bsdf).collect())
            }
            None => MaterialInstance::Unsupported,
        };
        self.instances.insert(node.to_string(), instance.clone());
        Ok(instance)
    }

    /// Returns the materials of a mesh from its surface and volume shaders. A
    /// medium used as the surface shader fills the shape.
    ///
    /// * `ctx`  - Translation context.
    /// * `mesh` - Mesh node.
    pub fn bind(&mut self, ctx: &TranslateContext, mesh: &str) -> Result<ShapeBinding, String> {
        let assignment = shader_assignment(ctx.host, mesh)?;
        let mut binding = ShapeBinding::default();

        if let Some(surface) = assignment.surface.as_deref() {
            match self.instance(ctx, surface)? {
                MaterialInstance::Bsdf(id) => binding.bsdf = Some(id),
                MaterialInstance::Medium(id) => binding.interior = Some(id),
                MaterialInstance::Inline(elements) => binding.inline = elements,
                MaterialInstance::Unsupported => (),
            }
        }

        if let Some(volume) = assignment.volume.as_deref() {
            match self.instance(ctx, volume)? {
                MaterialInstance::Medium(id) => {
                    if binding.interior.is_some() {
                        warn!("'{mesh}' has media as surface and volume shader; using '{volume}'");
                    }
                    binding.interior = Some(id);
                }
                MaterialInstance::Unsupported => (),
                _ => warn!("Volume shader '{volume}' of '{mesh}' is not a medium; ignoring"),
            }
        }

        if binding.is_empty() {
            debug!("'{mesh}' has no material");
        }
        Ok(binding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::settings::*;
    use pbrt_core::spectrum::*;
    use std::path::Path;

    fn assign(host: &mut MemoryHost, mesh: &str, surface: &str) {
        let sg = format!("{surface}SG");
        host.add_node(&sg, SHADING_ENGINE_KIND);
        host.connect(surface, "outColor", &sg, "surfaceShader");
        host.connect(mesh, "instObjGroups", &sg, "dagSetMembers");
    }

    #[test]
    fn shared_material_is_defined_once() {
        let mut host = MemoryHost::new();
        host.add_node("M", "MitsubaDiffuseShader")
            .set("reflectance", Color::grey(0.2));
        host.add_node("a", "mesh");
        host.add_node("b", "mesh");
        assign(&mut host, "a", "M");
        host.connect("b", "instObjGroups", "MSG", "dagSetMembers");

        let settings = RenderSettings::default();
        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        let mut cache = MaterialCache::new();
        let a = cache.bind(&ctx, "a").unwrap();
        let b = cache.bind(&ctx, "b").unwrap();
        assert_eq!(a.bsdf.as_deref(), Some("M"));
        assert_eq!(a, b);
        assert_eq!(cache.definitions().len(), 1);
    }

    #[test]
    fn ids_avoid_inner_material_names() {
        let mut host = MemoryHost::new();
        host.add_node("M", "MitsubaDiffuseShader").set("twosided", true);
        host.add_node("M InnerMaterial", "MitsubaDiffuseShader");
        host.add_node("M_InnerMaterial", "MitsubaDiffuseShader");

        let settings = RenderSettings::default();
        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        let mut cache = MaterialCache::new();
        cache.instance(&ctx, "M").unwrap();
        cache.instance(&ctx, "M InnerMaterial").unwrap();
        cache.instance(&ctx, "M_InnerMaterial").unwrap();

        let ids: Vec<&str> = cache
            .definitions()
            .iter()
            .flat_map(|d| d.descendants())
            .filter_map(|e| e.id())
            .collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids[0], "M");
        assert_eq!(ids[1], "MInnerMaterial");
    }

    #[test]
    fn area_light_is_inlined() {
        let mut host = MemoryHost::new();
        host.add_node("L", "MitsubaObjectAreaLightShader");
        host.add_node("a", "mesh");
        assign(&mut host, "a", "L");

        let settings = RenderSettings::default();
        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        let mut cache = MaterialCache::new();
        let binding = cache.bind(&ctx, "a").unwrap();
        assert!(binding.bsdf.is_none());
        assert_eq!(binding.inline[0].plugin_type(), Some("area"));
        assert!(cache.definitions().is_empty());
    }

    #[test]
    fn unsupported_shader_binds_nothing() {
        let mut host = MemoryHost::new();
        host.add_node("lambert1", "lambert");
        host.add_node("a", "mesh");
        assign(&mut host, "a", "lambert1");

        let settings = RenderSettings::default();
        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        let mut cache = MaterialCache::new();
        assert!(cache.bind(&ctx, "a").unwrap().is_empty());
    }
}
