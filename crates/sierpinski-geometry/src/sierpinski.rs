//! Recursive Sierpinski triangle generation.
//!
//! The output is a flat, non-indexed triangle list: every emitted triangle
//! contributes its own three vertices, and triangles appear in depth-first
//! pre-order (parent first, then its a-side, b-side and c-side children).
//!
//! A triangle is emitted for every depth `d` with `d <= max_depth`, so depth 0
//! is the outer triangle and depth `max_depth` is the finest level drawn.

use crate::{Point, Triangle, Vertex};

/// Red channel shared by every fractal vertex.
pub const RED: f32 = 0.25;

/// Blue channel shared by every fractal vertex.
pub const BLUE: f32 = 0.75;

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SierpinskiConfig {
    /// Outer triangle (depth 0).
    pub corners: Triangle,

    /// Deepest recursion level that still emits triangles.
    pub max_depth: u32,
}

impl SierpinskiConfig {
    pub const DEFAULT_MAX_DEPTH: u32 = 8;

    /// Runs the generator with these parameters.
    pub fn generate(&self) -> Vec<Vertex> {
        generate(self.corners, self.max_depth)
    }

    /// Number of vertices `generate` will produce.
    pub fn vertex_count(&self) -> usize {
        vertex_count(self.max_depth)
    }
}

impl Default for SierpinskiConfig {
    fn default() -> Self {
        Self {
            corners: Triangle::new(
                Point::new(-0.5, -0.5, 0.0),
                Point::new(0.0, 0.5, 0.0),
                Point::new(0.5, -0.5, 0.0),
            ),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Color for a vertex emitted at `depth`: `(0.25, depth / max_depth, 0.75)`.
///
/// With `max_depth == 0` only depth 0 exists and the green channel is 0.
#[inline]
pub fn depth_color(depth: u32, max_depth: u32) -> [f32; 3] {
    let green = if max_depth == 0 {
        0.0
    } else {
        depth as f32 / max_depth as f32
    };
    [RED, green, BLUE]
}

/// Exact output length for `max_depth`: `3 * (3^(max_depth + 1) - 1) / 2`.
///
/// Level `d` holds `3^d` triangles; summing levels `0..=max_depth` gives
/// `(3^(max_depth + 1) - 1) / 2` triangles of three vertices each.
/// Saturates instead of overflowing for absurd depths.
pub fn vertex_count(max_depth: u32) -> usize {
    let levels = 3usize.saturating_pow(max_depth.saturating_add(1));
    3usize.saturating_mul((levels - 1) / 2)
}

/// Upper bound on the up-front allocation made by `generate`.
///
/// Matches depth 12; deeper trees grow the buffer as they go.
pub const MAX_PREALLOCATED_VERTICES: usize = 3 * (531_441 * 3 - 1) / 2;

/// Generates the Sierpinski triangle rooted at `corners`.
///
/// Output size triples per level, so depths much past 12 exhaust memory
/// rather than fail cleanly. Callers taking depth from outside should bound it.
pub fn generate(corners: Triangle, max_depth: u32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(capacity_hint(max_depth));
    subdivide(corners, 0, max_depth, &mut out);
    debug_assert_eq!(out.len(), vertex_count(max_depth));
    out
}

fn capacity_hint(max_depth: u32) -> usize {
    vertex_count(max_depth).min(MAX_PREALLOCATED_VERTICES)
}

fn subdivide(tri: Triangle, depth: u32, max_depth: u32, out: &mut Vec<Vertex>) {
    if depth > max_depth {
        return;
    }

    let color = depth_color(depth, max_depth);
    out.push(Vertex::at(tri.a, color));
    out.push(Vertex::at(tri.b, color));
    out.push(Vertex::at(tri.c, color));

    for child in tri.children() {
        subdivide(child, depth + 1, max_depth, out);
    }
}
