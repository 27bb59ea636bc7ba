//! Render Data

use pbrt_core::fileutil::*;
use std::fs;
use std::path::PathBuf;

/// Files written for one frame: the scene description and its sidecars.
/// They are either all kept or all removed once the renderer is done.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderData {
    /// Directory holding the files.
    pub dir: PathBuf,

    /// Scene description file.
    pub scene_file: PathBuf,

    /// Sidecar files in creation order.
    pub sidecars: Vec<PathBuf>,

    /// Keep the files after rendering.
    pub keep: bool,
}

impl RenderData {
    /// Returns the scene file followed by the sidecars.
    pub fn files(&self) -> Vec<PathBuf> {
        std::iter::once(self.scene_file.clone())
            .chain(self.sidecars.iter().cloned())
            .collect()
    }

    /// Removes the files unless they are kept. The directory is removed too
    /// when nothing else is left in it.
    pub fn release(self) {
        if self.keep {
            info!("Keeping render data in '{}'", self.dir.display());
            return;
        }
        remove_files(&self.files());
        if let Err(e) = fs::remove_dir(&self.dir) {
            debug!("Leaving '{}'. {e}", self.dir.display());
        }
    }
}
