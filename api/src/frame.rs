//! Frame Driver

use super::*;
use pbrt_core::common::*;
use pbrt_core::element::*;
use pbrt_core::fileutil::*;
use pbrt_core::host::*;
use pbrt_core::settings::*;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// An inclusive range of frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameRange {
    /// First frame.
    pub start: Int,

    /// Last frame.
    pub end: Int,

    /// Frame increment.
    pub step: Int,
}

impl FrameRange {
    /// Create a new `FrameRange`.
    ///
    /// * `start` - First frame.
    /// * `end`   - Last frame.
    /// * `step`  - Frame increment.
    pub fn new(start: Int, end: Int, step: Int) -> Result<Self, String> {
        if step < 1 {
            return Err(format!("Frame step must be positive, got {step}"));
        }
        if end < start {
            return Err(format!("Frame range {start}-{end} is empty"));
        }
        Ok(Self { start, end, step })
    }

    /// A single frame.
    ///
    /// * `frame` - The frame.
    pub fn single(frame: Int) -> Self {
        Self {
            start: frame,
            end: frame,
            step: 1,
        }
    }

    /// Returns the frames in order.
    pub fn frames(&self) -> impl Iterator<Item = Int> {
        (self.start..=self.end).step_by(self.step as usize)
    }

    /// Returns the number of frames.
    pub fn len(&self) -> usize {
        let span = i64::from(self.end) - i64::from(self.start);
        (span / i64::from(self.step) + 1) as usize
    }

    /// Returns true if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A renderer invocation for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderJob {
    /// Scene description file.
    pub scene_file: PathBuf,

    /// Exported geometry and volume files used by the scene.
    pub geometry: Vec<PathBuf>,

    /// Output image.
    pub image: PathBuf,

    /// Ask the renderer for verbose output.
    pub verbose: bool,
}

impl RenderJob {
    /// Returns the renderer command line arguments.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![String::from("-o"), self.image.to_string_lossy().to_string()];
        if self.verbose {
            args.push(String::from("-v"));
        }
        args.push(self.scene_file.to_string_lossy().to_string());
        args
    }

    /// Runs the renderer and waits for it.
    ///
    /// * `renderer` - Renderer executable.
    pub fn run(&self, renderer: &Path) -> Result<(), String> {
        info!("{} {}", renderer.display(), self.args().iter().join(" "));
        let status = Command::new(renderer)
            .args(self.args())
            .status()
            .map_err(|e| format!("Unable to run '{}'. {e}", renderer.display()))?;
        if status.success() {
            Ok(())
        } else {
            Err(format!(
                "Renderer failed on '{}' with {status}",
                self.scene_file.display()
            ))
        }
    }
}

/// Options shared by all frames of a render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOptions {
    /// Directory receiving scene descriptions and images.
    pub out_dir: PathBuf,

    /// Base name of written files.
    pub scene_name: String,

    /// Renderer executable. Without one the job is only described.
    pub renderer: Option<PathBuf>,

    /// Ask the renderer for verbose output.
    pub verbose: bool,

    /// Overrides the `keepTempFiles` render setting.
    pub keep: Option<bool>,
}

/// Returns the file stem for a frame, `<scene>_<frame:04>`.
///
/// * `scene_name` - Base name.
/// * `frame`      - Frame number.
pub fn frame_stem(scene_name: &str, frame: Int) -> String {
    format!("{scene_name}_{}", pad_frame(frame))
}

/// Poses the host at a frame, writes its scene description and sidecars and
/// runs the renderer when one is configured. Render data is kept when the
/// retention flag is set or when no renderer ran.
///
/// * `host`  - The scene.
/// * `frame` - Frame number.
/// * `opts`  - Render options.
pub fn render_frame<H: SceneQuery + Timeline>(
    host: &mut H,
    frame: Int,
    opts: &FrameOptions,
) -> Result<RenderJob, String> {
    host.set_frame(frame)?;
    let settings = RenderSettings::from_host(&*host);

    let stem = frame_stem(&opts.scene_name, frame);
    let render_dir = opts.out_dir.join(&stem);
    let translation = translate_scene(&*host, &settings, &render_dir)?;

    let scene_file = render_dir.join(format!("{stem}.xml"));
    if let Err(e) = write_document(&translation.document, &scene_file) {
        remove_files(&translation.sidecars);
        return Err(e);
    }
    info!("Wrote '{}'", scene_file.display());

    let job = RenderJob {
        scene_file: scene_file.clone(),
        geometry: translation.sidecars.clone(),
        image: opts
            .out_dir
            .join(format!("{stem}.{}", translation.image_extension)),
        verbose: opts.verbose,
    };

    let data = RenderData {
        dir: render_dir,
        scene_file,
        sidecars: translation.sidecars,
        keep: opts.renderer.is_none() || opts.keep.unwrap_or(settings.keep_temp_files()),
    };
    let result = match &opts.renderer {
        Some(renderer) => job.run(renderer),
        None => {
            info!("No renderer; frame {frame} is ready in '{}'", data.dir.display());
            Ok(())
        }
    };
    data.release();
    result.map(|_| job)
}

/// Writes the scene description.
///
/// * `document` - The `<scene>` element.
/// * `path`     - Output file.
pub fn write_document(document: &Element, path: &Path) -> Result<(), String> {
    fs::write(path, document.to_document())
        .map_err(|e| format!("Unable to write '{}'. {e}", path.display()))
}
