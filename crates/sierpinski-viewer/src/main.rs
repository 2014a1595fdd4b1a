//! Sierpinski triangle viewer.
//!
//! Generates the fractal once, opens an 800x800 window and redraws the static
//! geometry every frame until Escape is pressed or the window is closed.

mod app;
mod config;

use std::process::ExitCode;

use anyhow::Result;
use sierpinski_engine::logging::{init_logging, LoggingConfig};
use sierpinski_engine::render::ShaderSources;
use sierpinski_engine::window::Runtime;

use crate::app::SierpinskiApp;
use crate::config::ViewerConfig;

/// Exit status for a failed startup: -1 truncated to a byte.
const INIT_FAILURE: u8 = 255;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run(ViewerConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::from(INIT_FAILURE)
        }
    }
}

fn run(config: ViewerConfig) -> Result<()> {
    let shaders = ShaderSources::load_dir(&config.shader_dir)?;

    let vertices = config.fractal.generate();
    log::info!(
        "generated Sierpinski triangle: depth {}, {} vertices",
        config.fractal.max_depth,
        vertices.len()
    );

    let app = SierpinskiApp::new(
        shaders,
        config.renderer_config(),
        config.clear_color,
        vertices,
    );

    Runtime::run(config.runtime_config(), config.gpu_init(), app)
}
