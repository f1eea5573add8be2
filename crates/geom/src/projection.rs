//! Orthographic projection onto canvas coordinates.

use nalgebra::{Point2, Vector3};

use wirecube_types::RenderConfig;

/// Project a rotated vertex onto the canvas. The result's `x` is the
/// column and `y` the row, both still fractional; rounding happens at
/// rasterization time.
///
/// Depth is discarded (no perspective divide). Columns are stretched by
/// the aspect factor so the cube reads as square in a terminal.
pub fn project(v: &Vector3<f64>, config: &RenderConfig) -> Point2<f64> {
    Point2::new(
        config.cols as f64 / 2.0 + v.x * config.aspect,
        config.rows as f64 / 2.0 + v.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_canvas_center() {
        let config = RenderConfig::default();
        let p = project(&Vector3::new(0.0, 0.0, 0.0), &config);
        assert_eq!(p.x, 21.0);
        assert_eq!(p.y, 8.5);
    }

    #[test]
    fn depth_is_ignored() {
        let config = RenderConfig::default();
        let near = project(&Vector3::new(1.5, -2.0, 7.0), &config);
        let far = project(&Vector3::new(1.5, -2.0, -7.0), &config);
        assert_eq!(near, far);
    }

    #[test]
    fn columns_are_aspect_stretched() {
        let config = RenderConfig::default();
        let p = project(&Vector3::new(2.0, 1.0, 0.0), &config);
        assert_eq!(p.x, 21.0 + 2.0 * config.aspect);
        assert_eq!(p.y, 8.5 + 1.0);
    }
}
