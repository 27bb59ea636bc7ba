#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod app;

use api::parser;
use api::*;
use app::*;
use pbrt_core::fileutil::*;
use pbrt_core::host::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

#[cfg(all(feature = "dhat-rs", feature = "jemalloc"))]
compile_error!("feature 'dhat-rs' and feature 'jemalloc' cannot be enabled at the same time");

#[cfg(feature = "dhat-rs")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "dhat-rs")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

#[cfg(feature = "jemalloc")]
#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static ALLOCATOR: Jemalloc = Jemalloc;

fn main() {
    #[cfg(feature = "dhat-rs")]
    let _dhat = Dhat::start_heap_profiling();

    // Initialize `env_logger`.
    env_logger::init();

    // Translate each scene dump. In case of error report it and continue.
    let mut failed = false;
    for path in OPTIONS.paths.iter() {
        if let Err(e) = render(path, &OPTIONS) {
            error!("{e}");
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}

/// Returns a progress bar over the frames of a scene.
fn progress_bar(frames: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(frames as u64);
    match ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        Ok(style) => bar.set_style(style.progress_chars("#>-")),
        Err(e) => warn!("Invalid progress bar template. {e}"),
    }
    bar
}

fn render(path: &Path, opts: &Options) -> Result<(), String> {
    let abs_path = absolute_path(path)?;
    let mut host = parser::parse_file(&abs_path)?;

    let frames = opts.frame_range(host.current_frame())?;
    let frame_opts = FrameOptions {
        out_dir: absolute_path(&opts.out_dir)?,
        scene_name: file_stem(&abs_path.to_string_lossy()),
        renderer: opts.renderer.clone(),
        verbose: opts.verbose,
        keep: opts.keep(),
    };
    ensure_dir(&frame_opts.out_dir)?;

    let bar = progress_bar(frames.len(), opts.quiet);
    for frame in frames.frames() {
        bar.set_message(format!("frame {frame}"));
        let job = render_frame(&mut host, frame, &frame_opts);
        bar.inc(1);
        let job = job.map_err(|e| format!("Frame {frame} of '{}' failed. {e}", path.display()))?;
        debug!("Renderer arguments: {:?}", job.args());
        info!("Frame {frame} -> '{}'", job.image.display());
    }
    bar.finish_and_clear();
    Ok(())
}
