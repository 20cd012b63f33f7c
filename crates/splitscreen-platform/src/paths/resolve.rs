use std::path::PathBuf;

use splitscreen_common::PlatformError;

pub(super) const APP_NAME: &str = "splitscreen";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/splitscreen`
/// - Linux: `$XDG_CONFIG_HOME/splitscreen` (defaults to `~/.config/splitscreen`)
/// - Windows: `%APPDATA%\splitscreen`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Located at `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Located at `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
