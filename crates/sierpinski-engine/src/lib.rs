//! Sierpinski engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the viewer binary: logging,
//! the wgpu context, the winit loop, input, frame timing, and the static mesh
//! renderer that draws pre-generated geometry.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod logging;
pub mod paint;
pub mod render;
