use anyhow::Result;

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Colors in the vertex data are written straight to the framebuffer; a
    /// non-sRGB format reproduces them as authored.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is available everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Features the device cannot be created without.
    pub required_features: wgpu::Features,

    /// Features enabled only when the adapter offers them.
    ///
    /// Empty unless wireframe rendering is requested (`POLYGON_MODE_LINE`).
    pub optional_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Asks for `POLYGON_MODE_LINE` if the adapter has it.
    pub fn with_wireframe(mut self) -> Self {
        self.optional_features |= wgpu::Features::POLYGON_MODE_LINE;
        self
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            optional_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Feature set to request from an adapter offering `available`.
///
/// Missing required features are an error. Missing optional ones are logged
/// and left out.
pub(crate) fn negotiate_features(
    required: wgpu::Features,
    optional: wgpu::Features,
    available: wgpu::Features,
) -> Result<wgpu::Features> {
    let missing = required - available;
    anyhow::ensure!(missing.is_empty(), "missing required features: {missing:?}");

    let dropped = optional - available;
    if !dropped.is_empty() {
        log::warn!("optional GPU features unavailable: {dropped:?}");
    }

    Ok(required | (optional & available))
}
