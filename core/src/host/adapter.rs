//! Scene Query Helpers

use super::*;

/// Node kind of the host's shading-engine indirection.
pub const SHADING_ENGINE_KIND: &str = "shadingEngine";

/// Surface and volume shader assigned to a geometry node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderAssignment {
    /// Shading engine node.
    pub shading_engine: Option<String>,

    /// Surface shader node.
    pub surface: Option<String>,

    /// Volume shader node.
    pub volume: Option<String>,
}

/// Returns the `"node.attr"` endpoint name.
///
/// * `node` - Node name.
/// * `attr` - Attribute name.
pub fn endpoint(node: &str, attr: &str) -> String {
    format!("{node}.{attr}")
}

/// Returns all nodes connected to an attribute in the host's order.
///
/// * `host` - The scene.
/// * `node` - Node name.
/// * `attr` - Attribute name.
pub fn connections_to(host: &dyn SceneQuery, node: &str, attr: &str) -> Result<Vec<String>, String> {
    let ep = endpoint(node, attr);
    Ok(host
        .list_connections(node)?
        .into_iter()
        .filter(|c| c.endpoint == ep)
        .map(|c| c.other)
        .collect())
}

/// Returns the first node connected to an attribute whose kind is one of
/// `kinds`. An empty `kinds` accepts any node.
///
/// * `host`  - The scene.
/// * `node`  - Node name.
/// * `attr`  - Attribute name.
/// * `kinds` - Accepted node kinds.
pub fn connected_node(
    host: &dyn SceneQuery,
    node: &str,
    attr: &str,
    kinds: &[&str],
) -> Result<Option<String>, String> {
    for other in connections_to(host, node, attr)? {
        if kinds.is_empty() {
            return Ok(Some(other));
        }
        let kind = host.node_kind(&other)?;
        if kinds.iter().any(|k| *k == kind) {
            return Ok(Some(other));
        }
    }
    Ok(None)
}

/// Returns whether a DAG node is visible. This is the AND of its explicit
/// visibility, not being an intermediate object, its override visibility when
/// overrides are enabled and the visibility of every ancestor.
///
/// * `host` - The scene.
/// * `node` - Node name.
pub fn is_visible(host: &dyn SceneQuery, node: &str) -> bool {
    let own = host.find_one_bool(node, "visibility", true)
        && !host.find_one_bool(node, "intermediateObject", false)
        && (!host.find_one_bool(node, "overrideEnabled", false)
            || host.find_one_bool(node, "overrideVisibility", true));
    if !own {
        return false;
    }

    host.list_relatives(node, Relation::Parent, false)
        .iter()
        .all(|parent| is_visible(host, parent))
}

/// Resolves the surface and volume shaders of a geometry node through its
/// shading engine.
///
/// * `host`     - The scene.
/// * `geometry` - Geometry node name.
pub fn shader_assignment(host: &dyn SceneQuery, geometry: &str) -> Result<ShaderAssignment, String> {
    let mut shading_engine = None;
    for c in host.list_connections(geometry)? {
        if host.node_kind(&c.other)? == SHADING_ENGINE_KIND {
            shading_engine = Some(c.other);
            break;
        }
    }

    match shading_engine {
        Some(sg) => Ok(ShaderAssignment {
            surface: connected_node(host, &sg, "surfaceShader", &[])?,
            volume: connected_node(host, &sg, "volumeShader", &[])?,
            shading_engine: Some(sg),
        }),
        None => Ok(ShaderAssignment::default()),
    }
}

/// Returns the parent transform of a DAG shape node, or the node itself when
/// it has no parent.
///
/// * `host` - The scene.
/// * `node` - Node name.
pub fn parent_transform(host: &dyn SceneQuery, node: &str) -> String {
    host.list_relatives(node, Relation::Parent, false)
        .into_iter()
        .next()
        .unwrap_or_else(|| node.to_string())
}
