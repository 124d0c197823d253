//! Store path resolution against the installation directory.

use directories::UserDirs;
use log::debug;
use std::path::{Path, PathBuf};

/// Resolve a store path; relative paths anchor to the installation
/// directory, not the process CWD, so behavior is stable regardless of
/// invocation site.
pub(super) fn resolve_store_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let root = install_root();
    debug!("anchoring relative store path (root={})", root.display());
    root.join(path)
}

/// The directory holding the running executable, falling back to the home
/// directory and finally the CWD when neither can be resolved.
fn install_root() -> PathBuf {
    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        return parent.to_path_buf();
    }
    if let Some(dirs) = UserDirs::new() {
        return dirs.home_dir().to_path_buf();
    }
    PathBuf::from(".")
}
