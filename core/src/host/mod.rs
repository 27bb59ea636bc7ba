//! Scene Query Interface
//!
//! The translator only reads the host scene through `SceneQuery`. All calls
//! are blocking and must be made from the host's main thread.

mod adapter;
mod memory;

use crate::common::*;
use crate::geometry::*;
use crate::paramset::*;
use crate::spectrum::*;
use std::path::{Path, PathBuf};

// Re-export
pub use adapter::*;
pub use memory::*;

/// A connection on a node: the endpoint on this node (`"node.attr"`) and the
/// node at the other end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    /// Endpoint on the queried node formatted as `"node.attr"`.
    pub endpoint: String,

    /// The node at the other end of the connection.
    pub other: String,
}

impl Connection {
    /// Creates a new connection.
    ///
    /// * `endpoint` - Endpoint on the queried node.
    /// * `other`    - The other node.
    pub fn new(endpoint: &str, other: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            other: other.to_string(),
        }
    }

    /// Returns the attribute part of the endpoint.
    pub fn attr(&self) -> &str {
        self.endpoint
            .rsplit_once('.')
            .map(|(_, a)| a)
            .unwrap_or(&self.endpoint)
    }
}

/// Direction for relative lookups in the DAG.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    Children,
    Parent,
}

/// Define a macro that can be used to generate a function for reading a typed
/// attribute with a default.
macro_rules! host_find_one {
    ($func: ident, $t: ty, $conv: ident) => {
        fn $func(&self, node: &str, attr: &str, default: $t) -> $t {
            self.get_attr(node, attr)
                .and_then(|v| v.$conv())
                .unwrap_or(default)
        }
    };
}

/// Read-only access to the host scene.
pub trait SceneQuery {
    /// Returns the value of an attribute or `None` if the node has no such
    /// attribute.
    ///
    /// * `node` - Node name.
    /// * `attr` - Attribute name.
    fn get_attr(&self, node: &str, attr: &str) -> Option<AttrValue>;

    /// Returns the names of all attributes on a node.
    ///
    /// * `node` - Node name.
    fn list_attrs(&self, node: &str) -> Vec<String>;

    /// Returns the connections on a node in the host's order.
    ///
    /// * `node` - Node name.
    fn list_connections(&self, node: &str) -> Result<Vec<Connection>, String>;

    /// Returns the kind (type name) of a node.
    ///
    /// * `node` - Node name.
    fn node_kind(&self, node: &str) -> Result<String, String>;

    /// Returns all nodes of a given kind in creation order.
    ///
    /// * `kind` - Node kind.
    fn list_of_kind(&self, kind: &str) -> Vec<String>;

    /// Returns the children or the parent of a DAG node.
    ///
    /// * `node`      - Node name.
    /// * `relation`  - Children or parent.
    /// * `full_path` - Return full DAG paths instead of short names.
    fn list_relatives(&self, node: &str, relation: Relation, full_path: bool) -> Vec<String>;

    /// Returns the world matrix of a DAG node.
    ///
    /// * `node` - Node name.
    fn world_matrix(&self, node: &str) -> Result<Matrix4x4, String>;

    /// Returns the current frame.
    fn current_frame(&self) -> Int;

    /// Returns the render resolution as `(width, height)`.
    fn render_resolution(&self) -> (Int, Int);

    /// Returns true if the camera is flagged renderable.
    ///
    /// * `camera` - Camera node name.
    fn is_renderable(&self, camera: &str) -> bool;

    /// Exports a geometry node to the neutral mesh container format, grouped
    /// by object with normals and smoothing and without materials.
    ///
    /// * `node` - Geometry node name.
    /// * `path` - Output file path.
    fn export_mesh(&self, node: &str, path: &Path) -> Result<PathBuf, String>;

    /// Returns the world space vertex positions of a geometry node.
    ///
    /// * `node` - Geometry node name.
    fn vertex_positions(&self, node: &str) -> Result<Vec<Point3f>, String>;

    host_find_one!(find_one_bool, bool, as_bool);
    host_find_one!(find_one_int, Int, as_int);
    host_find_one!(find_one_float, Float, as_float);
    host_find_one!(find_one_string, String, as_string);
    host_find_one!(find_one_color, Color, as_color);
    host_find_one!(find_one_vector3f, Vector3f, as_vector3f);

    /// Snapshots all attributes of a node into a parameter set.
    ///
    /// * `node` - Node name.
    fn node_params(&self, node: &str) -> ParamSet {
        let mut ps = ParamSet::new();
        for attr in self.list_attrs(node) {
            if let Some(value) = self.get_attr(node, &attr) {
                ps.add_attr(&attr, &value);
            }
        }
        ps
    }
}

/// Poses the host scene at a frame. Used when driving frame ranges.
pub trait Timeline {
    /// Advance the host to a frame.
    ///
    /// * `frame` - The frame.
    fn set_frame(&mut self, frame: Int) -> Result<(), String>;
}
