//! Back-face culling.
//!
//! The camera sits on the +Z axis looking along -Z, so a face is
//! front-facing exactly when its outward normal has a strictly positive
//! z-component. Faces that are edge-on to the camera (normal z of zero)
//! count as hidden.

use arrayvec::ArrayVec;
use nalgebra::Vector3;

use crate::cube::{Edge, Face, EDGES, EDGE_COUNT, FACES, VERTEX_COUNT};

/// Outward normal of a face, from the cross product of the two edge
/// vectors spanned by its first three vertices in winding order.
pub fn face_normal(verts: &[Vector3<f64>; VERTEX_COUNT], face: &Face) -> Vector3<f64> {
    let [a, b, c, _] = face.indices();
    (verts[b] - verts[a]).cross(&(verts[c] - verts[a]))
}

/// Whether a face points toward the camera.
pub fn face_visible(verts: &[Vector3<f64>; VERTEX_COUNT], face: &Face) -> bool {
    face_normal(verts, face).z > 0.0
}

/// Edges on the boundary of at least one visible face, in the fixed
/// [`EDGES`] order. An edge shared between a visible and a hidden face is
/// still included.
pub fn visible_edges(verts: &[Vector3<f64>; VERTEX_COUNT]) -> ArrayVec<Edge, EDGE_COUNT> {
    let mut keep = [false; EDGE_COUNT];
    for face in FACES.iter().filter(|face| face_visible(verts, face)) {
        for edge in face.edges() {
            if let Some(i) = EDGES.iter().position(|e| *e == edge) {
                keep[i] = true;
            }
        }
    }

    EDGES
        .iter()
        .zip(keep)
        .filter_map(|(edge, kept)| kept.then_some(*edge))
        .collect()
}
