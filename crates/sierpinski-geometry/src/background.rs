//! Full-viewport background quad.
//!
//! Four corners with per-corner colors, drawn as two indexed triangles that
//! share the bottom-left / top-right diagonal.

use crate::Vertex;

pub const BACKGROUND_VERTICES: [Vertex; 4] = [
    Vertex::new([-1.0, -1.0, 0.5], [0.0, 0.0, 0.5]),   // bottom left
    Vertex::new([-1.0, 1.0, 1.0], [1.0, 1.0, 0.125]),  // top left
    Vertex::new([1.0, 1.0, -1.0], [1.0, 1.0, 0.125]),  // top right
    Vertex::new([1.0, -1.0, 0.5], [1.0, 1.0, 0.5]),    // bottom right
];

pub const BACKGROUND_INDICES: [u32; 6] = [
    0, 1, 2, // top-left triangle
    0, 2, 3, // bottom-right triangle
];
