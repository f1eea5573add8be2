//! Static cube geometry.
//!
//! The model is a cube of half-size 1 centered on the origin. Vertices are
//! indexed back quad first, then front quad, counter-clockwise within each
//! quad; edges and faces refer to vertices by index.

use nalgebra::Vector3;

/// Number of cube corners.
pub const VERTEX_COUNT: usize = 8;

/// Number of cube edges.
pub const EDGE_COUNT: usize = 12;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// An unordered pair of vertex indices, stored with `lo <= hi` so that
/// equality ignores endpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The two vertex indices, low index first.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.lo, self.hi)
    }
}

/// A quad face: four vertex indices in counter-clockwise winding as seen
/// from outside the cube. The winding carries the outward normal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    indices: [usize; 4],
}

impl Face {
    pub const fn new(indices: [usize; 4]) -> Self {
        Self { indices }
    }

    pub fn indices(&self) -> [usize; 4] {
        self.indices
    }

    /// The four boundary edges, derived from consecutive winding pairs.
    pub fn edges(&self) -> [Edge; 4] {
        let [a, b, c, d] = self.indices;
        [
            Edge::new(a, b),
            Edge::new(b, c),
            Edge::new(c, d),
            Edge::new(d, a),
        ]
    }
}

/// Model-space cube corners.
pub fn vertices() -> [Vector3<f64>; VERTEX_COUNT] {
    [
        // back quad (z = -1)
        Vector3::new(-1.0, -1.0, -1.0),
        Vector3::new(1.0, -1.0, -1.0),
        Vector3::new(1.0, 1.0, -1.0),
        Vector3::new(-1.0, 1.0, -1.0),
        // front quad (z = +1)
        Vector3::new(-1.0, -1.0, 1.0),
        Vector3::new(1.0, -1.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(-1.0, 1.0, 1.0),
    ]
}

/// The 12 cube edges. This order is also the draw order.
pub const EDGES: [Edge; EDGE_COUNT] = [
    Edge::new(0, 1),
    Edge::new(1, 2),
    Edge::new(2, 3),
    Edge::new(3, 0),
    Edge::new(4, 5),
    Edge::new(5, 6),
    Edge::new(6, 7),
    Edge::new(7, 4),
    Edge::new(0, 4),
    Edge::new(1, 5),
    Edge::new(2, 6),
    Edge::new(3, 7),
];

/// The 6 cube faces, each wound counter-clockwise from outside.
pub const FACES: [Face; FACE_COUNT] = [
    Face::new([0, 3, 2, 1]), // back   (z = -1)
    Face::new([4, 5, 6, 7]), // front  (z = +1)
    Face::new([0, 1, 5, 4]), // bottom (y = -1)
    Face::new([2, 3, 7, 6]), // top    (y = +1)
    Face::new([0, 4, 7, 3]), // left   (x = -1)
    Face::new([1, 2, 6, 5]), // right  (x = +1)
];
