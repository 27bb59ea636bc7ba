//! Scene Assembler

use super::*;
use cameras::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::fileutil::*;
use pbrt_core::film::*;
use pbrt_core::host::*;
use pbrt_core::settings::*;
use filters::*;
use integrators::*;
use lights::*;
use samplers::*;
use shapes::*;
use std::path::{Path, PathBuf};

/// The result of translating one frame.
#[derive(Clone, Debug)]
pub struct SceneTranslation {
    /// The `<scene>` element.
    pub document: Element,

    /// Files written next to the scene in creation order.
    pub sidecars: Vec<PathBuf>,

    /// Extension of the image the renderer will write.
    pub image_extension: &'static str,
}

/// Translates the host scene. Sidecar files are written to `render_dir`. On
/// failure every sidecar written so far is removed.
///
/// * `host`       - The scene.
/// * `settings`   - Render settings for the frame.
/// * `render_dir` - Directory receiving sidecar files.
pub fn translate_scene(
    host: &dyn SceneQuery,
    settings: &RenderSettings,
    render_dir: &Path,
) -> Result<SceneTranslation, String> {
    ensure_dir(render_dir)?;
    let ctx = TranslateContext::new(host, settings, render_dir);
    let film = FilmSpec::from_settings(settings);

    match build_scene(&ctx, &film) {
        Ok(document) => Ok(SceneTranslation {
            document,
            sidecars: ctx.take_sidecars(),
            image_extension: film.extension(),
        }),
        Err(e) => {
            remove_files(&ctx.take_sidecars());
            Err(e)
        }
    }
}

/// Builds the `<scene>` element: integrator, sensor, lights, named materials
/// and shapes in that order.
fn build_scene(ctx: &TranslateContext, film: &FilmSpec) -> Result<Element, String> {
    let settings = ctx.settings;

    let integrator = make_integrator(settings, film);
    let sampler = make_sampler(settings);
    let film = film.to_element(settings, make_rfilter(settings));
    let sensor = make_sensor(ctx.host, settings, sampler, film)?;
    let emitters = make_lights(ctx)?;

    let mut cache = MaterialCache::new();
    let mut shapes = vec![];
    for mesh in visible_meshes(ctx.host) {
        let binding = cache.bind(ctx, &mesh)?;
        let filename = export_geometry(ctx, &mesh)?;
        shapes.push(shape_element(&filename.to_string_lossy(), &binding));
    }
    debug!(
        "Scene has {} lights, {} materials and {} shapes",
        emitters.len(),
        cache.definitions().len(),
        shapes.len()
    );

    let mut scene = Element::scene()
        .with_child(integrator)
        .with_child(sensor);
    for e in emitters
        .into_iter()
        .chain(cache.into_definitions())
        .chain(shapes)
    {
        scene.add_child(e);
    }
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::paramset::*;
    use pbrt_core::spectrum::*;

    fn cube(host: &mut MemoryHost, name: &str) {
        host.add_node(name, "mesh")
            .set(
                "points",
                AttrValue::FloatArray(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
            )
            .set("faceVertexCounts", AttrValue::IntArray(vec![3]))
            .set("faceVertexIndices", AttrValue::IntArray(vec![0, 1, 2]));
    }

    #[test]
    fn top_level_order() {
        let mut host = MemoryHost::new();
        host.add_node("cam", "camera").set("renderable", true);
        host.add_node("pt", "pointLight");
        host.add_node("M", "MitsubaDiffuseShader")
            .set("reflectance", Color::grey(0.3));
        host.add_node("MSG", SHADING_ENGINE_KIND);
        host.connect("M", "outColor", "MSG", "surfaceShader");
        cube(&mut host, "tri");
        host.connect("tri", "instObjGroups", "MSG", "dagSetMembers");

        let dir = std::env::temp_dir().join("api_scene_top_level_order");
        let settings = RenderSettings::from_host(&host);
        let t = translate_scene(&host, &settings, &dir).unwrap();
        let tags: Vec<&str> = t.document.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["integrator", "sensor", "emitter", "bsdf", "shape"]);
        assert_eq!(t.sidecars, vec![dir.join("tri.obj")]);
        assert_eq!(t.image_extension, "exr");
        remove_files(&t.sidecars);
    }

    #[test]
    fn failure_removes_sidecars() {
        let mut host = MemoryHost::new();
        host.add_node("cam", "camera");
        cube(&mut host, "good");
        host.add_node("bad", "mesh")
            .set("points", AttrValue::FloatArray(vec![0.0, 0.0, 0.0]))
            .set("faceVertexCounts", AttrValue::IntArray(vec![3]))
            .set("faceVertexIndices", AttrValue::IntArray(vec![0, 1, 2]));

        let dir = std::env::temp_dir().join("api_scene_failure_removes_sidecars");
        let settings = RenderSettings::from_host(&host);
        assert!(translate_scene(&host, &settings, &dir).is_err());
        assert!(!dir.join("good.obj").exists());
    }
}
