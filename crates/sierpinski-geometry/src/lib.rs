//! Geometry for the Sierpinski viewer.
//!
//! Everything here is plain CPU data in normalized device coordinates:
//! - `Point` / `Triangle`: positions in [-1, 1] per axis
//! - `Vertex`: interleaved position + color, laid out for direct GPU upload
//! - `sierpinski`: the recursive fractal generator
//! - `background`: the constant full-viewport quad

pub mod background;
pub mod sierpinski;

mod point;
mod vertex;

pub use point::{Point, Triangle};
pub use sierpinski::{SierpinskiConfig, depth_color, generate, vertex_count};
pub use vertex::{Vertex, as_floats};
