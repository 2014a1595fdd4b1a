use std::path::{Path, PathBuf};

use sierpinski_engine::device::GpuInit;
use sierpinski_engine::paint::Color;
use sierpinski_engine::render::{MeshRendererConfig, VERTEX_SHADER_FILE};
use sierpinski_engine::window::RuntimeConfig;
use sierpinski_geometry::SierpinskiConfig;
use winit::dpi::LogicalSize;

/// Deepest recursion accepted from the environment.
///
/// Depth 12 is already ~2.4M vertices; each extra level triples it.
pub const MAX_SUPPORTED_DEPTH: u32 = 12;

pub const ENV_MAX_DEPTH: &str = "SIERPINSKI_MAX_DEPTH";
pub const ENV_SHADER_DIR: &str = "SIERPINSKI_SHADER_DIR";
pub const ENV_WIREFRAME: &str = "SIERPINSKI_WIREFRAME";

/// Name of the directory searched for the two shader files.
pub const SHADER_DIR_NAME: &str = "shaders";

/// Everything the viewer needs to start.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,

    /// Initial window size in logical pixels.
    pub width: f64,
    pub height: f64,

    pub clear_color: Color,
    pub fractal: SierpinskiConfig,

    /// Directory holding `vertex.wgsl` and `fragment.wgsl`.
    ///
    /// Defaults to `shaders/` next to the executable if present there,
    /// otherwise `shaders/` relative to the working directory.
    pub shader_dir: PathBuf,

    /// Draw triangle outlines instead of filled triangles.
    pub wireframe: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Sierpinski".to_string(),
            width: 800.0,
            height: 800.0,
            clear_color: Color::rgb(0.2, 0.3, 0.3),
            fractal: SierpinskiConfig::default(),
            shader_dir: default_shader_dir(),
            wireframe: false,
        }
    }
}

impl ViewerConfig {
    /// Defaults overridden by `SIERPINSKI_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            match raw.trim().parse::<u32>() {
                Ok(depth) if depth > MAX_SUPPORTED_DEPTH => {
                    log::warn!(
                        "{ENV_MAX_DEPTH}={depth} exceeds {MAX_SUPPORTED_DEPTH}; clamping"
                    );
                    config.fractal.max_depth = MAX_SUPPORTED_DEPTH;
                }
                Ok(depth) => config.fractal.max_depth = depth,
                Err(e) => log::warn!("ignoring {ENV_MAX_DEPTH}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_SHADER_DIR) {
            if raw.trim().is_empty() {
                log::warn!("ignoring empty {ENV_SHADER_DIR}");
            } else {
                config.shader_dir = PathBuf::from(raw);
            }
        }

        if let Some(raw) = lookup(ENV_WIREFRAME) {
            match parse_flag(&raw) {
                Some(flag) => config.wireframe = flag,
                None => log::warn!("ignoring {ENV_WIREFRAME}={raw:?}: expected 1/0/true/false"),
            }
        }

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        let init = GpuInit::default();
        if self.wireframe { init.with_wireframe() } else { init }
    }

    pub fn renderer_config(&self) -> MeshRendererConfig {
        MeshRendererConfig {
            wireframe: self.wireframe,
        }
    }
}

fn default_shader_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_shader_dir(exe_dir.as_deref())
}

fn resolve_shader_dir(exe_dir: Option<&Path>) -> PathBuf {
    match exe_dir.map(|dir| dir.join(SHADER_DIR_NAME)) {
        Some(dir) if dir.join(VERTEX_SHADER_FILE).is_file() => dir,
        _ => PathBuf::from(SHADER_DIR_NAME),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> ViewerConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ViewerConfig::from_lookup(|key| map.get(key).cloned())
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn defaults_match_classic_window() {
        let cfg = ViewerConfig::default();
        assert_eq!((cfg.width, cfg.height), (800.0, 800.0));
        assert_eq!(cfg.clear_color, Color::rgba(0.2, 0.3, 0.3, 1.0));
        assert_eq!(cfg.fractal.max_depth, 8);
        assert!(!cfg.wireframe);
        assert!(cfg.shader_dir.ends_with(SHADER_DIR_NAME));
    }

    #[test]
    fn default_shader_dir_is_not_the_build_checkout() {
        let dir = ViewerConfig::default().shader_dir;
        assert!(!dir.starts_with(env!("CARGO_MANIFEST_DIR")), "{}", dir.display());
    }

    #[test]
    fn shader_dir_next_to_executable_wins() {
        let exe_dir = std::env::temp_dir()
            .join(format!("sierpinski-exe-{}", std::process::id()));
        let shaders = exe_dir.join(SHADER_DIR_NAME);
        std::fs::create_dir_all(&shaders).unwrap();
        std::fs::write(shaders.join(VERTEX_SHADER_FILE), "// vs").unwrap();

        assert_eq!(resolve_shader_dir(Some(&exe_dir)), shaders);

        std::fs::remove_dir_all(exe_dir).unwrap();
    }

    #[test]
    fn shader_dir_falls_back_to_working_directory() {
        let empty = std::env::temp_dir().join("sierpinski-exe-without-shaders");
        assert_eq!(resolve_shader_dir(Some(&empty)), PathBuf::from(SHADER_DIR_NAME));
        assert_eq!(resolve_shader_dir(None), PathBuf::from(SHADER_DIR_NAME));
    }

    #[test]
    fn no_overrides_is_default() {
        let cfg = from_pairs(&[]);
        assert_eq!(cfg.fractal, SierpinskiConfig::default());
    }

    // ── overrides ─────────────────────────────────────────────────────────

    #[test]
    fn depth_override_applies() {
        assert_eq!(from_pairs(&[(ENV_MAX_DEPTH, "3")]).fractal.max_depth, 3);
        assert_eq!(from_pairs(&[(ENV_MAX_DEPTH, " 0 ")]).fractal.max_depth, 0);
    }

    #[test]
    fn depth_override_is_clamped() {
        let cfg = from_pairs(&[(ENV_MAX_DEPTH, "40")]);
        assert_eq!(cfg.fractal.max_depth, MAX_SUPPORTED_DEPTH);
    }

    #[test]
    fn bad_depth_keeps_default() {
        assert_eq!(from_pairs(&[(ENV_MAX_DEPTH, "deep")]).fractal.max_depth, 8);
        assert_eq!(from_pairs(&[(ENV_MAX_DEPTH, "-1")]).fractal.max_depth, 8);
    }

    #[test]
    fn shader_dir_override_applies() {
        let cfg = from_pairs(&[(ENV_SHADER_DIR, "/opt/shaders")]);
        assert_eq!(cfg.shader_dir, PathBuf::from("/opt/shaders"));
    }

    #[test]
    fn wireframe_flag_parses() {
        assert!(from_pairs(&[(ENV_WIREFRAME, "TRUE")]).wireframe);
        assert!(from_pairs(&[(ENV_WIREFRAME, "1")]).wireframe);
        assert!(!from_pairs(&[(ENV_WIREFRAME, "false")]).wireframe);
        assert!(!from_pairs(&[(ENV_WIREFRAME, "maybe")]).wireframe);
    }

    #[test]
    fn flag_accepts_only_documented_spellings() {
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("False"), Some(false));
        for raw in ["yes", "on", "no", "off", ""] {
            assert_eq!(parse_flag(raw), None, "{raw:?}");
        }
        assert!(!from_pairs(&[(ENV_WIREFRAME, "on")]).wireframe);
    }

    // ── derived configs ───────────────────────────────────────────────────

    #[test]
    fn wireframe_asks_for_line_mode_without_requiring_it() {
        let cfg = ViewerConfig { wireframe: true, ..Default::default() };
        let init = cfg.gpu_init();
        assert!(!init.optional_features.is_empty());
        assert!(init.required_features.is_empty());
        assert!(cfg.renderer_config().wireframe);
        assert!(ViewerConfig::default().gpu_init().optional_features.is_empty());
    }

    #[test]
    fn runtime_config_carries_title_and_size() {
        let rc = ViewerConfig::default().runtime_config();
        assert_eq!(rc.title, "Sierpinski");
        assert_eq!(rc.initial_size, LogicalSize::new(800.0, 800.0));
    }
}
