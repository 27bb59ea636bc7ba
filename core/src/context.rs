//! Translation Context

use crate::common::*;
use crate::host::*;
use crate::settings::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// State shared by all builders while translating one frame.
pub struct TranslateContext<'a> {
    /// The scene.
    pub host: &'a dyn SceneQuery,

    /// Render settings for the frame.
    pub settings: &'a RenderSettings,

    /// Directory receiving exported geometry and volume files.
    pub render_dir: PathBuf,

    /// Files written for the frame in creation order.
    sidecars: RefCell<Vec<PathBuf>>,

    /// File names handed out in the render directory.
    file_names: RefCell<HashSet<String>>,

    /// Shader nodes being translated, outermost first.
    shader_stack: RefCell<Vec<String>>,
}

impl<'a> TranslateContext<'a> {
    /// Create a new context.
    ///
    /// * `host`       - The scene.
    /// * `settings`   - Render settings for the frame.
    /// * `render_dir` - Directory receiving sidecar files.
    pub fn new(host: &'a dyn SceneQuery, settings: &'a RenderSettings, render_dir: &Path) -> Self {
        Self {
            host,
            settings,
            render_dir: render_dir.to_path_buf(),
            sidecars: RefCell::new(vec![]),
            file_names: RefCell::new(HashSet::new()),
            shader_stack: RefCell::new(vec![]),
        }
    }

    /// Returns the frame being translated.
    pub fn frame(&self) -> Int {
        self.settings.frame
    }

    /// Returns a path inside the render directory.
    ///
    /// * `file_name` - File name.
    pub fn render_path(&self, file_name: &str) -> PathBuf {
        self.render_dir.join(file_name)
    }

    /// Returns a path inside the render directory no other sidecar of the
    /// frame uses. The first request for a stem gets `<stem>.<extension>`,
    /// repeats get `<stem>_<n>.<extension>`.
    ///
    /// * `stem`      - File stem.
    /// * `extension` - File extension.
    pub fn unique_render_path(&self, stem: &str, extension: &str) -> PathBuf {
        let mut used = self.file_names.borrow_mut();
        let mut name = format!("{stem}.{extension}");
        let mut n = 0;
        while used.contains(&name) {
            n += 1;
            name = format!("{stem}_{n}.{extension}");
        }
        used.insert(name.clone());
        self.render_path(&name)
    }

    /// Records a file written for the frame.
    ///
    /// * `path` - The file.
    pub fn add_sidecar(&self, path: PathBuf) {
        debug!("Sidecar {}", path.display());
        self.sidecars.borrow_mut().push(path);
    }

    /// Returns the files written so far.
    pub fn sidecars(&self) -> Vec<PathBuf> {
        self.sidecars.borrow().clone()
    }

    /// Removes and returns the files written so far.
    pub fn take_sidecars(&self) -> Vec<PathBuf> {
        self.sidecars.take()
    }

    /// Marks a shader node as being translated. Fails if the node is already
    /// being translated further up, i.e. the shader graph has a cycle.
    ///
    /// * `node` - Shader node.
    pub fn enter_shader(&self, node: &str) -> Result<(), String> {
        let mut stack = self.shader_stack.borrow_mut();
        if stack.iter().any(|n| n == node) {
            return Err(format!(
                "Shader cycle: {} -> {node}",
                stack.join(" -> ")
            ));
        }
        stack.push(node.to_string());
        Ok(())
    }

    /// Marks the innermost shader node as translated.
    pub fn leave_shader(&self) {
        self.shader_stack.borrow_mut().pop();
    }
}
