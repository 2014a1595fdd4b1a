use bytemuck::{Pod, Zeroable};

use crate::Point;

/// Interleaved vertex: `[x, y, z, r, g, b]`.
///
/// The `#[repr(C)]` layout is the upload format: position at byte offset 0,
/// color at byte offset 12, stride 24.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 3]>();

    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    #[inline]
    pub const fn at(point: Point, color: [f32; 3]) -> Self {
        Self::new(point.to_array(), color)
    }

    #[inline]
    pub fn point(self) -> Point {
        Point::from(self.position)
    }
}

/// Views a vertex slice as the flat interleaved float array.
#[inline]
pub fn as_floats(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}
