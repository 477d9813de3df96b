use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the XDG config base.
const APP_DIR: &str = "hnview";

/// Config file name inside the application directory.
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "HNVIEW_CONFIG";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for hnview: `$XDG_CONFIG_HOME/hnview` or `$HOME/.config/hnview`.
///
/// Does not create the directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR)
}

/// Logs directory under config: `<config dir>/logs` (ensured to exist when possible).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Determine which config file to read.
///
/// Inputs:
/// - `explicit`: Path given on the command line, if any.
///
/// Output:
/// - The first candidate in priority order: `explicit`, `$HNVIEW_CONFIG`, then
///   `<config dir>/config.toml`.
///
/// Details:
/// - The returned path may not exist; callers treat a missing file as "use defaults".
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Ok(p) = env::var(CONFIG_ENV)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    config_dir().join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let p = Path::new("/tmp/custom-hnview.toml");
        assert_eq!(resolve_config_path(Some(p)), p.to_path_buf());
    }

    #[test]
    fn config_dir_ends_with_app_name() {
        assert!(config_dir().ends_with(APP_DIR));
    }
}
