//! Location of `config.ini` relative to an anchor directory.

use std::path::{Component, Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Directory name that marks the server subtree inside the project root.
pub const DEFAULT_MARKER: &str = "SERVER";

/// Resolve the config file for `anchor`.
///
/// The result is the part of `anchor` preceding the first component equal to
/// `marker`, joined with [`CONFIG_FILE_NAME`]. When no component matches, the
/// file is expected directly inside `anchor`.
pub fn resolve_config_path(anchor: &Path, marker: &str) -> PathBuf {
    let mut root = PathBuf::new();
    let mut found = false;
    for component in anchor.components() {
        if let Component::Normal(name) = component {
            if name == marker {
                found = true;
                break;
            }
        }
        root.push(component.as_os_str());
    }
    if !found {
        root = anchor.to_path_buf();
    }
    root.join(CONFIG_FILE_NAME)
}
