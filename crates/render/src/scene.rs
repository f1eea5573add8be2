//! Per-frame composition: geometry in, canvas out.
//!
//! Pure with respect to the filesystem, so frames can be rendered and
//! inspected in tests without touching disk.

use wirecube_geom::{projection, transform, visibility};
use wirecube_types::RenderConfig;

use crate::canvas::Canvas;
use crate::raster;

/// Render one frame of the tumble animation.
///
/// Runs the whole pipeline: angle schedule, rotation, projection, back-face
/// culling, edge rasterization in the static draw order, then vertex
/// markers over everything. Each call builds a fresh canvas; frames share
/// no state beyond the frame index.
pub fn render_frame(frame: usize, config: &RenderConfig) -> Canvas {
    let angles = transform::frame_angles(frame, config);
    let verts = transform::transform_vertices(angles, config.scale);
    let projected = verts.map(|v| projection::project(&v, config));

    let mut canvas = Canvas::new(config.rows, config.cols);

    for edge in visibility::visible_edges(&verts) {
        let (a, b) = edge.endpoints();
        raster::draw_segment(&mut canvas, projected[a], projected[b]);
    }

    // All eight corners get a marker, hidden ones included.
    for p in projected {
        raster::mark_vertex(&mut canvas, p);
    }

    canvas
}
