//! Cube geometry and the I/O-free stages of the rendering pipeline.
//!
//! This crate is pure math: static cube data, the per-frame rotation
//! transform, orthographic projection, and back-face visibility. It never
//! touches the filesystem or a terminal, so everything here is
//! deterministic and unit-testable.
//!
//! # Module structure
//!
//! - [`cube`]: vertices, edges, and faces of the unit cube
//! - [`transform`]: Euler rotation and the per-frame angle schedule
//! - [`projection`]: 3D to canvas-coordinate mapping
//! - [`visibility`]: back-face culling and the visible-edge list

pub mod cube;
pub mod projection;
pub mod transform;
pub mod visibility;

pub use wirecube_types as types;

pub use cube::{Edge, Face, EDGES, EDGE_COUNT, FACES, FACE_COUNT, VERTEX_COUNT};
pub use projection::project;
pub use transform::{frame_angles, rotation, transform_vertices};
pub use visibility::{face_normal, face_visible, visible_edges};
