//! Frame generator entry point.
//!
//! Renders the full tumble animation and writes one text file per frame
//! under `frames/default/`. There are no runtime arguments; all parameters
//! are the compile-time defaults in `wirecube-types`.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wirecube::render::write_frames;
use wirecube::types::RenderConfig;

/// Output directory, relative to the project root.
const OUT_DIR: &str = "frames/default";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RenderConfig::default();
    let written = write_frames(&config, Path::new(OUT_DIR))?;
    println!("{written} frames written to {OUT_DIR}");
    Ok(())
}
