//! Euler rotation and the per-frame angle schedule.

use std::f64::consts::TAU;

use nalgebra::{Rotation3, Vector3};

use wirecube_types::{RenderConfig, AY_OFFSET, AZ_OFFSET, AZ_RATE};

use crate::cube::{self, VERTEX_COUNT};

/// Rotation about X, then Y, then Z, each the standard right-handed
/// rotation. The application order is part of the contract; the matrix
/// product below reads right to left.
pub fn rotation(ax: f64, ay: f64, az: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), az)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), ay)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), ax)
}

/// Rotation angles `(ax, ay, az)` for a frame index.
///
/// With `t = 2π·frame / num_frames`: `ax` is the fixed tilt, `ay` sweeps a
/// full turn per loop starting corner-on, and `az` tumbles at [`AZ_RATE`].
/// `az` lands off its start value after a full loop; the drift is kept.
pub fn frame_angles(frame: usize, config: &RenderConfig) -> (f64, f64, f64) {
    let t = TAU * frame as f64 / config.num_frames as f64;
    (config.tilt, t + AY_OFFSET, AZ_RATE * t + AZ_OFFSET)
}

/// Scale the model cube and rotate it by the given angles.
pub fn transform_vertices(
    (ax, ay, az): (f64, f64, f64),
    scale: f64,
) -> [Vector3<f64>; VERTEX_COUNT] {
    let rot = rotation(ax, ay, az);
    cube::vertices().map(|v| rot * (v * scale))
}
