//! Standards document path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the standards document location.
pub const STANDARDS_ENV_VAR: &str = "BELLRINGERS_STANDARDS_FILE";

/// File name of the bundled standards document.
pub const DEFAULT_STANDARDS_FILE: &str = "Intro_CS.md";

/// Get the standards document path.
///
/// Resolution order:
/// 1. explicit `path` (the CLI `--standards-file` flag)
/// 2. `BELLRINGERS_STANDARDS_FILE` environment variable
/// 3. `standards/Intro_CS.md` relative to workspace root
///
/// # Example
///
/// ```rust,ignore
/// let path = bell_standards::standards_file(None);
/// let catalog = bell_standards::StandardsCatalog::load(&path);
/// ```
pub fn standards_file(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Ok(file) = std::env::var(STANDARDS_ENV_VAR)
        && !file.trim().is_empty()
    {
        return PathBuf::from(file);
    }
    default_standards_file()
}

/// The bundled `standards/Intro_CS.md` document.
pub fn default_standards_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../standards")
        .join(DEFAULT_STANDARDS_FILE)
}
