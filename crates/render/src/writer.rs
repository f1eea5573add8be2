//! Persists rendered frames as numbered text files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use wirecube_types::RenderConfig;

use crate::scene;

/// Render every frame and write it under `out_dir` as `frame_N.txt`,
/// N counting from 1. Returns the number of frames written.
///
/// The directory (and parents) are created if missing. Generation is fully
/// deterministic, so re-running overwrites each file with identical bytes.
/// Any filesystem failure aborts the run with the offending path in the
/// error chain; files already written stay valid.
pub fn write_frames(config: &RenderConfig, out_dir: &Path) -> Result<usize> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    for frame in 0..config.num_frames {
        let canvas = scene::render_frame(frame, config);
        let path = out_dir.join(format!("frame_{}.txt", frame + 1));
        fs::write(&path, canvas.to_text())
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(frame = frame + 1, path = %path.display(), "frame written");
    }

    Ok(config.num_frames)
}
