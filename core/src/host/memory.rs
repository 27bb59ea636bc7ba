//! In-Memory Host Scene

use super::*;
use std::collections::HashMap;
use std::fmt::Write;
use std::fs;

/// A node of the in-memory scene.
#[derive(Clone, Debug)]
pub struct MemoryNode {
    /// Unique node name.
    pub name: String,

    /// Node kind.
    pub kind: String,

    /// Parent DAG node.
    pub parent: Option<String>,

    /// Attributes in creation order.
    pub attrs: Vec<(String, AttrValue)>,

    /// Keyed attribute values as `(frame, attribute, value)`.
    pub keys: Vec<(Int, String, AttrValue)>,

    /// Connections in creation order.
    pub connections: Vec<Connection>,
}

impl MemoryNode {
    /// Sets an attribute value.
    ///
    /// * `attr`  - Attribute name.
    /// * `value` - Attribute value.
    pub fn set<V: Into<AttrValue>>(&mut self, attr: &str, value: V) -> &mut Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(a, _)| a == attr) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((attr.to_string(), value)),
        }
        self
    }

    /// Sets an attribute value that applies from a frame onwards.
    ///
    /// * `frame` - First frame the value applies to.
    /// * `attr`  - Attribute name.
    /// * `value` - Attribute value.
    pub fn key<V: Into<AttrValue>>(&mut self, frame: Int, attr: &str, value: V) -> &mut Self {
        self.keys.push((frame, attr.to_string(), value.into()));
        self
    }

    /// Sets the parent DAG node.
    ///
    /// * `parent` - Parent node name.
    pub fn parent(&mut self, parent: &str) -> &mut Self {
        self.parent = Some(parent.to_string());
        self
    }
}

/// A host scene held in memory. Used to drive translations without the host
/// application.
#[derive(Clone, Debug)]
pub struct MemoryHost {
    /// Nodes in creation order.
    nodes: Vec<MemoryNode>,

    /// Index of nodes by name.
    index: HashMap<String, usize>,

    /// Current frame.
    frame: Int,

    /// Render resolution as `(width, height)`.
    resolution: (Int, Int),
}

impl MemoryHost {
    /// Returns an empty scene at frame 1 with a 640x480 resolution.
    pub fn new() -> Self {
        Self {
            nodes: vec![],
            index: HashMap::new(),
            frame: 1,
            resolution: (640, 480),
        }
    }

    /// Adds a node or replaces an existing node with the same name.
    ///
    /// * `name` - Unique node name.
    /// * `kind` - Node kind.
    pub fn add_node(&mut self, name: &str, kind: &str) -> &mut MemoryNode {
        let node = MemoryNode {
            name: name.to_string(),
            kind: kind.to_string(),
            parent: None,
            attrs: vec![],
            keys: vec![],
            connections: vec![],
        };
        let i = match self.index.get(name) {
            Some(&i) => {
                self.nodes[i] = node;
                i
            }
            None => {
                self.nodes.push(node);
                self.index.insert(name.to_string(), self.nodes.len() - 1);
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[i]
    }

    /// Returns a node by short name or DAG path.
    ///
    /// * `name` - Node name.
    pub fn node(&self, name: &str) -> Option<&MemoryNode> {
        let short = name.rsplit('|').next().unwrap_or(name);
        self.index.get(short).map(|&i| &self.nodes[i])
    }

    /// Returns a mutable node by short name or DAG path.
    ///
    /// * `name` - Node name.
    pub fn node_mut(&mut self, name: &str) -> Option<&mut MemoryNode> {
        let short = name.rsplit('|').next().unwrap_or(name);
        match self.index.get(short) {
            Some(&i) => Some(&mut self.nodes[i]),
            None => None,
        }
    }

    /// Sets an attribute on an existing node. Unknown nodes are reported and
    /// ignored.
    ///
    /// * `node`  - Node name.
    /// * `attr`  - Attribute name.
    /// * `value` - Attribute value.
    pub fn set_attr<V: Into<AttrValue>>(&mut self, node: &str, attr: &str, value: V) {
        match self.node_mut(node) {
            Some(n) => {
                n.set(attr, value);
            }
            None => warn!("Cannot set '{attr}' on unknown node '{node}'"),
        }
    }

    /// Connects `src.src_attr` to `dst.dst_attr`. Both nodes record the
    /// connection.
    ///
    /// * `src`      - Source node.
    /// * `src_attr` - Source attribute.
    /// * `dst`      - Destination node.
    /// * `dst_attr` - Destination attribute.
    pub fn connect(&mut self, src: &str, src_attr: &str, dst: &str, dst_attr: &str) {
        if self.node(src).is_none() || self.node(dst).is_none() {
            warn!("Cannot connect '{src}.{src_attr}' to '{dst}.{dst_attr}'; unknown node");
            return;
        }
        if let Some(n) = self.node_mut(dst) {
            n.connections
                .push(Connection::new(&endpoint(dst, dst_attr), src));
        }
        if let Some(n) = self.node_mut(src) {
            n.connections
                .push(Connection::new(&endpoint(src, src_attr), dst));
        }
    }

    /// Sets the render resolution.
    ///
    /// * `width`  - Width in pixels.
    /// * `height` - Height in pixels.
    pub fn set_resolution(&mut self, width: Int, height: Int) {
        self.resolution = (width, height);
    }

    /// Returns the node or an error naming it.
    fn lookup(&self, node: &str) -> Result<&MemoryNode, String> {
        self.node(node).ok_or(format!("No node named '{node}'"))
    }

    /// Returns the full DAG path of a node.
    fn full_path(&self, node: &MemoryNode) -> String {
        let mut path = format!("|{}", node.name);
        let mut parent = node.parent.as_deref();
        while let Some(p) = parent {
            path = format!("|{p}{path}");
            parent = self.node(p).and_then(|n| n.parent.as_deref());
        }
        path
    }

    /// Returns the object space points of a geometry node.
    fn points(&self, node: &str) -> Result<Vec<Point3f>, String> {
        let n = self.lookup(node)?;
        let values = self
            .get_attr(&n.name, "points")
            .and_then(|v| v.as_floats())
            .ok_or(format!("Geometry '{node}' has no points"))?;
        if values.len() % 3 != 0 {
            return Err(format!("Geometry '{node}' points are not xyz triplets"));
        }
        Ok(values
            .chunks(3)
            .map(|p| Point3f::new(p[0], p[1], p[2]))
            .collect())
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneQuery for MemoryHost {
    fn get_attr(&self, node: &str, attr: &str) -> Option<AttrValue> {
        let n = self.node(node)?;
        let keyed = n
            .keys
            .iter()
            .filter(|(f, a, _)| a == attr && *f <= self.frame)
            .max_by_key(|(f, _, _)| *f)
            .map(|(_, _, v)| v.clone());
        keyed.or_else(|| {
            n.attrs
                .iter()
                .find(|(a, _)| a == attr)
                .map(|(_, v)| v.clone())
        })
    }

    fn list_attrs(&self, node: &str) -> Vec<String> {
        match self.node(node) {
            Some(n) => {
                let mut attrs: Vec<String> = n.attrs.iter().map(|(a, _)| a.clone()).collect();
                for (_, a, _) in n.keys.iter() {
                    if !attrs.contains(a) {
                        attrs.push(a.clone());
                    }
                }
                attrs
            }
            None => vec![],
        }
    }

    fn list_connections(&self, node: &str) -> Result<Vec<Connection>, String> {
        Ok(self.lookup(node)?.connections.clone())
    }

    fn node_kind(&self, node: &str) -> Result<String, String> {
        Ok(self.lookup(node)?.kind.clone())
    }

    fn list_of_kind(&self, kind: &str) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.name.clone())
            .collect()
    }

    fn list_relatives(&self, node: &str, relation: Relation, full_path: bool) -> Vec<String> {
        let name = |n: &MemoryNode| {
            if full_path {
                self.full_path(n)
            } else {
                n.name.clone()
            }
        };
        let Some(n) = self.node(node) else {
            return vec![];
        };
        match relation {
            Relation::Parent => n
                .parent
                .as_deref()
                .and_then(|p| self.node(p))
                .map(|p| vec![name(p)])
                .unwrap_or_default(),
            Relation::Children => self
                .nodes
                .iter()
                .filter(|c| c.parent.as_deref() == Some(n.name.as_str()))
                .map(name)
                .collect(),
        }
    }

    fn world_matrix(&self, node: &str) -> Result<Matrix4x4, String> {
        let n = self.lookup(node)?;
        if let Some(m) = self.get_attr(&n.name, "worldMatrix").and_then(|v| v.as_matrix()) {
            return Ok(m);
        }
        match n.parent.as_deref() {
            Some(p) => self.world_matrix(p),
            None => Ok(Matrix4x4::IDENTITY),
        }
    }

    fn current_frame(&self) -> Int {
        self.frame
    }

    fn render_resolution(&self) -> (Int, Int) {
        self.resolution
    }

    fn is_renderable(&self, camera: &str) -> bool {
        self.find_one_bool(camera, "renderable", false)
    }

    fn export_mesh(&self, node: &str, path: &Path) -> Result<PathBuf, String> {
        let n = self.lookup(node)?;
        let points = self.vertex_positions(node)?;
        let counts = self
            .get_attr(&n.name, "faceVertexCounts")
            .and_then(|v| v.as_ints())
            .unwrap_or_default();
        let indices = self
            .get_attr(&n.name, "faceVertexIndices")
            .and_then(|v| v.as_ints())
            .unwrap_or_default();

        let mut obj = String::new();
        let _ = writeln!(obj, "o {}", n.name);
        for p in points.iter() {
            let _ = writeln!(obj, "v {} {} {}", p.x, p.y, p.z);
        }

        // One normal per face followed by the faces that use it.
        let mut faces = String::new();
        let mut start = 0;
        for (f, &count) in counts.iter().enumerate() {
            let end = start + count as usize;
            if count < 3 || end > indices.len() {
                return Err(format!("Geometry '{node}' has an invalid face {f}"));
            }
            let face = &indices[start..end];
            let vertex = |i: Int| {
                points
                    .get(i as usize)
                    .copied()
                    .ok_or(format!("Geometry '{node}' face {f} has a bad vertex index {i}"))
            };
            let (a, b, c) = (vertex(face[0])?, vertex(face[1])?, vertex(face[2])?);
            let normal = (b - a).cross(&(c - a)).normalize();
            let _ = writeln!(obj, "vn {} {} {}", normal.x, normal.y, normal.z);
            let _ = write!(faces, "f");
            for i in face {
                let _ = write!(faces, " {}//{}", i + 1, f + 1);
            }
            faces.push('\n');
            start = end;
        }
        obj.push_str("s 1\n");
        obj.push_str(&faces);

        fs::write(path, obj)
            .map_err(|e| format!("Unable to export '{node}' to '{}'. {e}", path.display()))?;
        Ok(path.to_path_buf())
    }

    fn vertex_positions(&self, node: &str) -> Result<Vec<Point3f>, String> {
        let m = self.world_matrix(node)?;
        Ok(self
            .points(node)?
            .iter()
            .map(|p| m.transform_point(p))
            .collect())
    }
}

impl Timeline for MemoryHost {
    fn set_frame(&mut self, frame: Int) -> Result<(), String> {
        self.frame = frame;
        Ok(())
    }
}
