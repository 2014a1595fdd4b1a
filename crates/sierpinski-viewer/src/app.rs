use sierpinski_engine::core::{App, AppControl, FrameCtx};
use sierpinski_engine::input::{InputFrame, InputState, Key};
use sierpinski_engine::paint::Color;
use sierpinski_engine::render::{MeshRenderer, MeshRendererConfig, ShaderSources, StaticMesh};
use sierpinski_geometry::Vertex;
use sierpinski_geometry::background::{BACKGROUND_INDICES, BACKGROUND_VERTICES};

/// Background quad plus a pre-generated fractal, drawn every frame until
/// Escape is pressed.
pub struct SierpinskiApp {
    renderer: MeshRenderer,
    clear: Color,
}

impl SierpinskiApp {
    /// `fractal` is uploaded once on the first frame and never regenerated.
    pub fn new(
        shaders: ShaderSources,
        renderer_config: MeshRendererConfig,
        clear: Color,
        fractal: Vec<Vertex>,
    ) -> Self {
        let mut renderer = MeshRenderer::new(shaders, renderer_config);

        renderer.push(StaticMesh::indexed(
            "background",
            BACKGROUND_VERTICES.to_vec(),
            BACKGROUND_INDICES.to_vec(),
        ));
        renderer.push(StaticMesh::triangles("sierpinski", fractal));

        Self { renderer, clear }
    }
}

/// Escape held, or pressed and released since the last frame.
pub fn close_requested(input: &InputState, frame: &InputFrame) -> bool {
    input.key_down(Key::Escape) || frame.key_pressed(Key::Escape)
}

impl App for SierpinskiApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if close_requested(ctx.input, ctx.input_frame) {
            log::info!("escape pressed at frame {}", ctx.time.frame_index);
            return AppControl::Exit;
        }

        let renderer = &mut self.renderer;
        ctx.render(self.clear, |rctx, target| renderer.render(rctx, target))
    }

    fn on_exit(&mut self) {
        let released = self.renderer.release();
        log::debug!("released GPU buffers for {released} meshes");
    }
}
