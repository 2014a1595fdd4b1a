use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of the vertex stage inside a shader directory.
pub const VERTEX_SHADER_FILE: &str = "vertex.wgsl";

/// File name of the fragment stage inside a shader directory.
pub const FRAGMENT_SHADER_FILE: &str = "fragment.wgsl";

/// WGSL source for the two pipeline stages.
///
/// Interface contract:
/// - vertex entry `vs_main`, inputs `@location(0)` position and
///   `@location(1)` color, both `vec3<f32>`
/// - fragment entry `fs_main`, one color target
/// - no bind groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub const VERTEX_ENTRY: &'static str = "vs_main";
    pub const FRAGMENT_ENTRY: &'static str = "fs_main";

    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Reads both stages from explicit file paths.
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self> {
        let vertex = read_source(vertex_path.as_ref())?;
        let fragment = read_source(fragment_path.as_ref())?;
        Ok(Self { vertex, fragment })
    }

    /// Reads `vertex.wgsl` and `fragment.wgsl` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let (vertex, fragment) = Self::paths_in(dir.as_ref());
        Self::load(vertex, fragment)
    }

    /// Resolves the stage file paths inside `dir`.
    pub fn paths_in(dir: &Path) -> (PathBuf, PathBuf) {
        (dir.join(VERTEX_SHADER_FILE), dir.join(FRAGMENT_SHADER_FILE))
    }
}

fn read_source(path: &Path) -> Result<String> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader {}", path.display()))?;
    anyhow::ensure!(!src.trim().is_empty(), "shader {} is empty", path.display());
    log::debug!("loaded shader {} ({} bytes)", path.display(), src.len());
    Ok(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("sierpinski-shader-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_dir_reads_both_stages() {
        let dir = scratch_dir("both");
        std::fs::write(dir.join(VERTEX_SHADER_FILE), "// vs").unwrap();
        std::fs::write(dir.join(FRAGMENT_SHADER_FILE), "// fs").unwrap();

        let src = ShaderSources::load_dir(&dir).unwrap();
        assert_eq!(src, ShaderSources::new("// vs", "// fs"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let dir = scratch_dir("missing");
        std::fs::write(dir.join(VERTEX_SHADER_FILE), "// vs").unwrap();

        let err = ShaderSources::load_dir(&dir).unwrap_err();
        assert!(format!("{err:#}").contains(FRAGMENT_SHADER_FILE));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = scratch_dir("empty");
        std::fs::write(dir.join(VERTEX_SHADER_FILE), "  \n").unwrap();
        std::fs::write(dir.join(FRAGMENT_SHADER_FILE), "// fs").unwrap();

        assert!(ShaderSources::load_dir(&dir).is_err());

        std::fs::remove_dir_all(dir).unwrap();
    }
}
