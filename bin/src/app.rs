//! Application options

use clap::Parser;
use pbrt_core::common::*;
use std::path::PathBuf;

lazy_static! {
    /// The global application options.
    pub static ref OPTIONS: Options = Options::parse();
}

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Directory receiving scene descriptions, sidecars and images.
    #[arg(
        long = "outdir",
        short = 'o',
        value_name = "DIR",
        default_value = ".",
        help = "Write scene descriptions and images to the given directory."
    )]
    pub out_dir: PathBuf,

    /// First frame.
    #[arg(
        long,
        value_name = "FRAME",
        help = "First frame to translate. Defaults to the frame in the scene dump."
    )]
    pub start: Option<Int>,

    /// Last frame.
    #[arg(long, value_name = "FRAME", help = "Last frame to translate.")]
    pub end: Option<Int>,

    /// Frame increment.
    #[arg(
        long,
        value_name = "NUM",
        default_value_t = 1,
        help = "Frame increment for a frame range."
    )]
    pub step: Int,

    /// Keep render data after rendering.
    #[arg(
        long,
        help = "Keep scene descriptions and sidecars after rendering. Overrides keepTempFiles."
    )]
    pub keep: bool,

    /// Renderer executable.
    #[arg(
        long,
        value_name = "PATH",
        help = "Run the given renderer on each frame. Without it frames are only written."
    )]
    pub renderer: Option<PathBuf>,

    /// Ask the renderer for verbose output.
    #[arg(long, short = 'v', help = "Pass -v to the renderer.")]
    pub verbose: bool,

    /// Suppress the progress bar.
    #[arg(long, short = 'q', help = "Suppress all output other than log messages.")]
    pub quiet: bool,

    /// Scene dump files.
    #[arg(required = true, help = "Input scene dump files")]
    pub paths: Vec<PathBuf>,
}

impl Options {
    /// Returns the frames to translate for a scene posed at `current`.
    ///
    /// * `current` - The scene's own frame.
    pub fn frame_range(&self, current: Int) -> Result<api::FrameRange, String> {
        let start = self.start.unwrap_or(current);
        let end = self.end.unwrap_or(start);
        api::FrameRange::new(start, end, self.step)
    }

    /// Returns the retention override. Only an explicit `--keep` overrides
    /// the render settings.
    pub fn keep(&self) -> Option<bool> {
        if self.keep {
            Some(true)
        } else {
            None
        }
    }
}
