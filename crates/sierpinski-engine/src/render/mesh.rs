use sierpinski_geometry::{Vertex, as_floats};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget, ShaderSources};

const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x3, // position
    1 => Float32x3  // color
];

/// Buffer layout for interleaved `Vertex` data.
pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

/// Geometry that never changes after upload.
///
/// Without indices the vertices are drawn as a plain triangle list.
#[derive(Debug, Clone)]
pub struct StaticMesh {
    label: String,
    vertices: Vec<Vertex>,
    indices: Option<Vec<u32>>,
}

impl StaticMesh {
    pub fn triangles(label: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        Self {
            label: label.into(),
            vertices,
            indices: None,
        }
    }

    pub fn indexed(label: impl Into<String>, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            label: label.into(),
            vertices,
            indices: Some(indices),
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Element count for the draw call: indices if present, otherwise vertices.
    pub fn draw_count(&self) -> u32 {
        let n = self.indices.as_ref().map_or(self.vertices.len(), Vec::len);
        u32::try_from(n).unwrap_or(u32::MAX)
    }
}

fn polygon_mode(config: &MeshRendererConfig, enabled: wgpu::Features) -> wgpu::PolygonMode {
    if !config.wireframe {
        return wgpu::PolygonMode::Fill;
    }
    if enabled.contains(wgpu::Features::POLYGON_MODE_LINE) {
        wgpu::PolygonMode::Line
    } else {
        log::warn!("wireframe requested but POLYGON_MODE_LINE is not enabled; drawing filled");
        wgpu::PolygonMode::Fill
    }
}

/// GPU-side copy of a `StaticMesh`.
struct MeshBuffers {
    vbo: wgpu::Buffer,
    ibo: Option<wgpu::Buffer>,
    draw_count: u32,
}

impl MeshBuffers {
    fn upload(device: &wgpu::Device, mesh: &StaticMesh) -> Self {
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} vbo", mesh.label)),
            contents: bytemuck::cast_slice(as_floats(&mesh.vertices)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ibo = mesh.indices.as_ref().map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} ibo", mesh.label)),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            vbo,
            ibo,
            draw_count: mesh.draw_count(),
        }
    }
}

/// Options for `MeshRenderer`.
#[derive(Debug, Clone, Default)]
pub struct MeshRendererConfig {
    /// Rasterize triangle edges only. Needs `POLYGON_MODE_LINE` on the device
    /// (see `GpuInit::with_wireframe`); falls back to filled triangles without it.
    pub wireframe: bool,
}

/// Draws a fixed set of static meshes with a single pass-through pipeline.
///
/// Meshes are uploaded once, on the first `render` after they are added, into
/// immutable buffers. Each frame issues one draw per mesh in insertion order.
pub struct MeshRenderer {
    shaders: ShaderSources,
    config: MeshRendererConfig,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    pending: Vec<StaticMesh>,
    uploaded: Vec<MeshBuffers>,
}

impl MeshRenderer {
    pub fn new(shaders: ShaderSources, config: MeshRendererConfig) -> Self {
        Self {
            shaders,
            config,
            pipeline_format: None,
            pipeline: None,
            pending: Vec::new(),
            uploaded: Vec::new(),
        }
    }

    /// Queues a mesh for upload. Draw order follows insertion order.
    pub fn push(&mut self, mesh: StaticMesh) {
        self.pending.push(mesh);
    }

    /// Number of meshes currently resident on the GPU.
    pub fn uploaded_len(&self) -> usize {
        self.uploaded.len()
    }

    /// Number of meshes still waiting for upload.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        if self.uploaded.is_empty() {
            return;
        }

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sierpinski mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);

        for mesh in &self.uploaded {
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            match &mesh.ibo {
                Some(ibo) => {
                    rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.draw_count, 0, 0..1);
                }
                None => rpass.draw(0..mesh.draw_count, 0..1),
            }
        }
    }

    /// Drops every GPU buffer and the pipeline. Returns the number of meshes released.
    ///
    /// Meshes that were never uploaded are discarded too; nothing is left to
    /// free afterwards.
    pub fn release(&mut self) -> usize {
        let released = self.uploaded.len();
        self.uploaded.clear();
        self.pending.clear();
        self.pipeline = None;
        self.pipeline_format = None;
        released
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let vs = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sierpinski vertex shader"),
            source: wgpu::ShaderSource::Wgsl(self.shaders.vertex.as_str().into()),
        });
        let fs = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sierpinski fragment shader"),
            source: wgpu::ShaderSource::Wgsl(self.shaders.fragment.as_str().into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sierpinski pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let polygon_mode = polygon_mode(&self.config, ctx.device.features());

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sierpinski mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs,
                entry_point: Some(ShaderSources::VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs,
                entry_point: Some(ShaderSources::FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Sub-triangle winding alternates; draw both faces.
                cull_mode: None,
                polygon_mode,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("mesh pipeline built for {:?} ({polygon_mode:?})", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.pending.is_empty() {
            return;
        }

        for mesh in self.pending.drain(..) {
            log::debug!(
                "uploading mesh \"{}\": {} vertices, {} draw elements",
                mesh.label,
                mesh.vertices.len(),
                mesh.draw_count()
            );
            self.uploaded.push(MeshBuffers::upload(ctx.device, &mesh));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinski_geometry::background::{BACKGROUND_INDICES, BACKGROUND_VERTICES};
    use sierpinski_geometry::SierpinskiConfig;

    // ── vertex layout ─────────────────────────────────────────────────────

    #[test]
    fn layout_matches_interleaved_vertex() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);

        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, Vertex::COLOR_OFFSET as u64);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x3);
    }

    // ── StaticMesh ────────────────────────────────────────────────────────

    #[test]
    fn triangle_list_draws_every_vertex() {
        let cfg = SierpinskiConfig { max_depth: 3, ..Default::default() };
        let mesh = StaticMesh::triangles("fractal", cfg.generate());
        assert!(!mesh.is_indexed());
        assert_eq!(mesh.draw_count() as usize, cfg.vertex_count());
    }

    #[test]
    fn indexed_mesh_draws_indices() {
        let mesh = StaticMesh::indexed(
            "background",
            BACKGROUND_VERTICES.to_vec(),
            BACKGROUND_INDICES.to_vec(),
        );
        assert!(mesh.is_indexed());
        assert_eq!(mesh.draw_count(), 6);
        assert_eq!(mesh.vertices.len(), 4);
    }

    #[test]
    fn upload_bytes_are_the_flat_float_array() {
        let mesh = StaticMesh::indexed(
            "background",
            BACKGROUND_VERTICES.to_vec(),
            BACKGROUND_INDICES.to_vec(),
        );
        let floats = as_floats(&mesh.vertices);
        assert_eq!(floats.len(), 4 * 6);
        assert_eq!(&floats[..6], &[-1.0, -1.0, 0.5, 0.0, 0.0, 0.5]);

        let bytes: &[u8] = bytemuck::cast_slice(floats);
        assert_eq!(bytes.len(), mesh.vertices.len() * Vertex::STRIDE);
    }

    // ── polygon mode ──────────────────────────────────────────────────────

    #[test]
    fn wireframe_uses_line_mode_when_enabled() {
        let config = MeshRendererConfig { wireframe: true };
        let mode = polygon_mode(&config, wgpu::Features::POLYGON_MODE_LINE);
        assert_eq!(mode, wgpu::PolygonMode::Line);
    }

    #[test]
    fn wireframe_falls_back_to_fill_without_line_mode() {
        let config = MeshRendererConfig { wireframe: true };
        let mode = polygon_mode(&config, wgpu::Features::empty());
        assert_eq!(mode, wgpu::PolygonMode::Fill);
    }

    #[test]
    fn filled_by_default() {
        let mode = polygon_mode(&MeshRendererConfig::default(), wgpu::Features::POLYGON_MODE_LINE);
        assert_eq!(mode, wgpu::PolygonMode::Fill);
    }

    // ── MeshRenderer bookkeeping ──────────────────────────────────────────

    #[test]
    fn pushed_meshes_wait_for_upload() {
        let mut r = MeshRenderer::new(ShaderSources::new("", ""), MeshRendererConfig::default());
        r.push(StaticMesh::triangles("a", Vec::new()));
        r.push(StaticMesh::triangles("b", Vec::new()));
        assert_eq!(r.pending_len(), 2);
        assert_eq!(r.uploaded_len(), 0);
    }

    #[test]
    fn release_before_upload_frees_nothing() {
        let mut r = MeshRenderer::new(ShaderSources::new("", ""), MeshRendererConfig::default());
        r.push(StaticMesh::triangles("a", Vec::new()));
        assert_eq!(r.release(), 0);
        assert_eq!(r.pending_len(), 0);
        assert_eq!(r.release(), 0);
    }
}
