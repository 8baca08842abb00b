//! Platform-specific paths for design files.
//!
//! # Directory Structure
//!
//! - **User designs**: `~/.config/flauta/designs/` (Linux),
//!   `~/Library/Application Support/flauta/designs/` (macOS),
//!   `%APPDATA%\flauta\designs\` (Windows)
//! - **User config**: the `flauta` directory above it
//!
//! # Example
//!
//! ```rust,no_run
//! use flauta_config::paths;
//!
//! let designs_dir = paths::user_designs_dir();
//! println!("User designs: {:?}", designs_dir);
//!
//! if let Some(path) = paths::find_design("c4-six-hole") {
//!     println!("Found design at: {:?}", path);
//! }
//! ```

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "flauta";

/// Subdirectory name for designs.
const DESIGNS_SUBDIR: &str = "designs";

/// Returns the user-specific designs directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_designs_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(DESIGNS_SUBDIR)
}

/// Returns the user-specific configuration directory.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Find a design file by name or path.
///
/// The name can be an absolute or relative path to a TOML file, or a bare
/// design name (with or without the `.toml` extension) looked up in the user
/// designs directory.
pub fn find_design(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);

    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{}.toml", name)
    };

    let user_path = user_designs_dir().join(&filename);
    if user_path.is_file() {
        return Some(user_path);
    }

    None
}

/// Ensure the user designs directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_designs_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_designs_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all design files in the user designs directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_designs() -> Vec<PathBuf> {
    list_designs_in_dir(&user_designs_dir())
}

/// Helper to list design files in a directory.
fn list_designs_in_dir(dir: &PathBuf) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|ext| ext == "toml").unwrap_or(false)
        })
        .collect()
}

/// Get the design name from a file path.
///
/// # Example
///
/// ```rust
/// use flauta_config::paths::design_name_from_path;
/// use std::path::Path;
///
/// let name = design_name_from_path(Path::new("/path/to/c4-six-hole.toml"));
/// assert_eq!(name, Some("c4-six-hole".to_string()));
/// ```
pub fn design_name_from_path(path: &std::path::Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn user_dirs_are_app_scoped() {
        assert!(user_config_dir().to_string_lossy().contains("flauta"));
        let designs = user_designs_dir();
        assert!(designs.starts_with(user_config_dir()));
        assert!(designs.to_string_lossy().contains("designs"));
    }

    #[test]
    fn find_design_by_path() {
        let temp_dir = TempDir::new().unwrap();
        let design_path = temp_dir.path().join("test.toml");
        fs::write(&design_path, "name = \"test\"").unwrap();

        let found = find_design(design_path.to_str().unwrap());
        assert_eq!(found, Some(design_path));
    }

    #[test]
    fn find_design_not_found() {
        assert!(find_design("nonexistent_design_12345").is_none());
    }

    #[test]
    fn list_designs_filters_toml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("one.toml"), "").unwrap();
        fs::write(temp_dir.path().join("two.toml"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let designs = list_designs_in_dir(&temp_dir.path().to_path_buf());
        assert_eq!(designs.len(), 2);
        assert!(designs.iter().all(|p| p.extension().unwrap() == "toml"));
    }

    #[test]
    fn list_designs_nonexistent_dir() {
        assert!(list_designs_in_dir(&PathBuf::from("/nonexistent/path/12345")).is_empty());
    }

    #[test]
    fn name_from_path_strips_extension() {
        let path = std::path::Path::new("/somewhere/low-whistle.toml");
        assert_eq!(design_name_from_path(path), Some("low-whistle".to_string()));
    }
}
