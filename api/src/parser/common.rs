//! Common

use pbrt_core::common::*;
use pbrt_core::host::*;
use pbrt_core::paramset::*;

/// Represents the `dump` rule of a scene dump.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Dump {
    /// Parsed `stmt`s.
    pub(crate) stmts: Vec<Stmt>,
}

impl Dump {
    /// Builds an in-memory scene from the statements.
    pub(crate) fn process(&self) -> Result<MemoryHost, String> {
        let mut host = MemoryHost::new();
        for stmt in self.stmts.iter() {
            stmt.process(&mut host)?;
        }
        Ok(host)
    }
}

/// Represents the `stmt` rule of a scene dump.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Stmt {
    Frame(Int),                        // frame_stmt(frame)
    Resolution(Int, Int),              // resolution_stmt(width, height)
    Node(NodeStmt),                    // node_stmt
    Connect(String, String),           // connect_stmt(src, dst)
}

impl Stmt {
    /// Applies the statement to the scene.
    ///
    /// * `host` - The scene.
    pub(crate) fn process(&self, host: &mut MemoryHost) -> Result<(), String> {
        match self {
            Self::Frame(frame) => host.set_frame(*frame),
            Self::Resolution(width, height) => {
                host.set_resolution(*width, *height);
                Ok(())
            }
            Self::Node(stmt) => {
                stmt.process(host);
                Ok(())
            }
            Self::Connect(src, dst) => {
                let (src_node, src_attr) = split_endpoint(src)?;
                let (dst_node, dst_attr) = split_endpoint(dst)?;
                if host.node(dst_node).is_none() || host.node(src_node).is_none() {
                    return Err(format!("Connection '{src}' -> '{dst}' refers to an unknown node"));
                }
                host.connect(src_node, src_attr, dst_node, dst_attr);
                Ok(())
            }
        }
    }
}

/// Represents the `node_stmt` rule of a scene dump.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NodeStmt {
    pub(crate) name: String,
    pub(crate) kind: String,
    pub(crate) parent: Option<String>,
    pub(crate) attrs: Vec<(String, AttrValue)>,
    pub(crate) keys: Vec<(Int, String, AttrValue)>,
}

impl NodeStmt {
    /// Adds the node to the scene.
    ///
    /// * `host` - The scene.
    pub(crate) fn process(&self, host: &mut MemoryHost) {
        let node = host.add_node(&self.name, &self.kind);
        if let Some(parent) = &self.parent {
            node.parent(parent);
        }
        for (attr, value) in self.attrs.iter() {
            node.set(attr, value.clone());
        }
        for (frame, attr, value) in self.keys.iter() {
            node.key(*frame, attr, value.clone());
        }
    }
}

/// Splits a `"node.attr"` endpoint at the last `.`.
///
/// * `endpoint` - The endpoint.
pub(crate) fn split_endpoint(endpoint: &str) -> Result<(&str, &str), String> {
    match endpoint.rsplit_once('.') {
        Some((node, attr)) if !node.is_empty() && !attr.is_empty() => Ok((node, attr)),
        _ => Err(format!("Invalid connection endpoint '{endpoint}'")),
    }
}
