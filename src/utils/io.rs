// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory. Nothing is created on disk.
pub fn get_app_config_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "passwordfactory", "password_factory") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            log::warn!("Could not determine config directory");
            None
        }
    }
}
