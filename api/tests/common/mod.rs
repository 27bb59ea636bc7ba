//! Helpers shared by the integration tests.

#![allow(dead_code)]

use api::*;
use pbrt_core::element::*;
use pbrt_core::host::*;
use pbrt_core::paramset::*;
use pbrt_core::settings::*;
use std::path::PathBuf;

/// Returns an empty scratch directory under the system temp directory.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("api_tests").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Adds a unit cube's corner triangle mesh under a transform.
pub fn add_mesh(host: &mut MemoryHost, name: &str) {
    host.add_node(&format!("{name}Xform"), "transform");
    host.add_node(name, "mesh")
        .parent(&format!("{name}Xform"))
        .set(
            "points",
            AttrValue::FloatArray(vec![
                0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0,
            ]),
        )
        .set("faceVertexCounts", AttrValue::IntArray(vec![3, 3]))
        .set("faceVertexIndices", AttrValue::IntArray(vec![0, 1, 2, 0, 2, 3]));
}

/// Assigns a surface shader to a mesh through a shading engine named after
/// the shader.
pub fn assign_surface(host: &mut MemoryHost, mesh: &str, shader: &str) {
    let sg = format!("{shader}SG");
    if host.node(&sg).is_none() {
        host.add_node(&sg, SHADING_ENGINE_KIND);
        host.connect(shader, "outColor", &sg, "surfaceShader");
    }
    host.connect(mesh, "instObjGroups", &sg, "dagSetMembers");
}

/// Translates the scene with its own render settings.
pub fn translate(host: &MemoryHost, name: &str) -> (SceneTranslation, PathBuf) {
    let dir = scratch_dir(name);
    let settings = RenderSettings::from_host(host);
    let t = translate_scene(host, &settings, &dir).unwrap();
    (t, dir)
}

/// Returns the first top-level element with a tag.
pub fn top<'a>(scene: &'a Element, tag: &str) -> &'a Element {
    scene
        .children
        .iter()
        .find(|c| c.tag == tag)
        .unwrap_or_else(|| panic!("no <{tag}> in scene"))
}

/// Returns every element of the document in document order.
pub fn all_elements(scene: &Element) -> Vec<&Element> {
    scene.descendants()
}
