//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and issue draws into
//! a `RenderTarget` provided by the frame loop.
//!
//! Convention:
//! - CPU geometry is already in NDC ([-1, 1] on every axis, OpenGL-style z).
//! - The vertex shader remaps z into wgpu's [0, 1] depth range.

mod ctx;
mod mesh;
mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{vertex_layout, MeshRenderer, MeshRendererConfig, StaticMesh};
pub use shader::{ShaderSources, FRAGMENT_SHADER_FILE, VERTEX_SHADER_FILE};
