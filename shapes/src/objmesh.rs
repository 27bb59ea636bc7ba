//! Exported Meshes
//!
//! Visible host geometry is written to Wavefront OBJ files in the render
//! directory and referenced from `obj` shapes.

use core::context::*;
use core::element::*;
use core::fileutil::*;
use core::host::*;
use std::path::PathBuf;

/// Node kind of host polygon meshes.
pub const MESH_KIND: &str = "mesh";

/// Materials attached to a shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeBinding {
    /// Id of a named BSDF.
    pub bsdf: Option<String>,

    /// Id of a named medium filling the shape.
    pub interior: Option<String>,

    /// Elements defined inside the shape (area emitters, subsurface
    /// integrators and their BSDFs).
    pub inline: Vec<Element>,
}

impl ShapeBinding {
    /// Returns true if nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.bsdf.is_none() && self.interior.is_none() && self.inline.is_empty()
    }
}

/// Returns the visible meshes in creation order.
///
/// * `host` - The scene.
pub fn visible_meshes(host: &dyn SceneQuery) -> Vec<String> {
    host.list_of_kind(MESH_KIND)
        .into_iter()
        .filter(|mesh| {
            let visible = is_visible(host, mesh);
            if !visible {
                debug!("Skipping hidden mesh '{mesh}'");
            }
            visible
        })
        .collect()
}

/// Exports a mesh into the render directory and records it as a sidecar.
/// Returns the absolute path of the written file.
///
/// * `ctx`  - Translation context.
/// * `mesh` - Mesh node.
pub fn export_geometry(ctx: &TranslateContext, mesh: &str) -> Result<PathBuf, String> {
    let path = ctx.unique_render_path(&sanitize_name(mesh), "obj");
    let written = ctx
        .host
        .export_mesh(mesh, &path)
        .map_err(|e| format!("Unable to export '{mesh}'. {e}"))?;
    ctx.add_sidecar(written.clone());
    debug!("Exported '{mesh}' to '{}'", written.display());
    absolute_path(&written)
}

/// Returns an `obj` shape for an exported mesh.
///
/// * `filename` - Exported mesh file.
/// * `binding`  - Attached materials.
pub fn shape_element(filename: &str, binding: &ShapeBinding) -> Element {
    let mut shape =
        Element::plugin("shape", "obj", None).with_child(Element::string("filename", filename));
    if let Some(id) = &binding.bsdf {
        shape.add_child(Element::reference(None, id));
    }
    if let Some(id) = &binding.interior {
        shape.add_child(Element::reference(Some("interior"), id));
    }
    for e in binding.inline.iter() {
        shape.add_child(e.clone());
    }
    shape
}
