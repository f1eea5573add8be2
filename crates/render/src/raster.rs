//! Line rasterization with direction-aware glyphs.

use nalgebra::Point2;

use crate::canvas::Canvas;

/// Glyph for a local step direction `(sc, sr)` in (column, row) deltas.
fn step_glyph(sc: i32, sr: i32) -> char {
    if sr == 0 {
        '-'
    } else if sc == 0 {
        '|'
    } else if (sc > 0) == (sr > 0) {
        '\\'
    } else {
        '/'
    }
}

/// Draw one projected segment onto the canvas.
///
/// Endpoints are rounded to cells to fix the step count, but interpolation
/// runs on the unrounded endpoints for precision. The glyph is chosen from
/// the local direction at every sampled step rather than once per segment,
/// so a curved or multi-segment path would still pick the right characters.
///
/// Segments whose endpoints round to the same cell degenerate to a single
/// `+` marker.
pub fn draw_segment(canvas: &mut Canvas, p0: Point2<f64>, p1: Point2<f64>) {
    let (c0, r0) = (p0.x, p0.y);
    let (c1, r1) = (p1.x, p1.y);
    let (ic0, ir0) = (c0.round() as i32, r0.round() as i32);
    let (ic1, ir1) = (c1.round() as i32, r1.round() as i32);

    let dc = ic1 - ic0;
    let dr = ir1 - ir0;
    let steps = dc.abs().max(dr.abs());
    if steps == 0 {
        canvas.put(ic0, ir0, '+');
        return;
    }

    let (mut prev_col, mut prev_row) = (ic0, ir0);
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let col = (c0 + t * (c1 - c0)).round() as i32;
        let row = (r0 + t * (r1 - r0)).round() as i32;

        // First sample has no predecessor; use the whole-segment direction.
        let (sc, sr) = if i == 0 {
            (dc, dr)
        } else {
            (col - prev_col, row - prev_row)
        };
        canvas.put(col, row, step_glyph(sc, sr));

        prev_col = col;
        prev_row = row;
    }
}

/// Stamp a vertex marker, overwriting whatever the edges left behind.
pub fn mark_vertex(canvas: &mut Canvas, p: Point2<f64>) {
    canvas.put(p.x.round() as i32, p.y.round() as i32, 'o');
}
