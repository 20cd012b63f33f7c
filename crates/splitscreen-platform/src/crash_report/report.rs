use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_urls;

/// Writes a crash report to disk when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside a panic hook, so every error is swallowed.
///
/// URLs and credential-like values are redacted before writing.
/// On Unix, the report file is set to mode 0o600 (owner read/write only).
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let dir = crash_report_dir().ok()?;
    let path = dir.join(format!("crash_{timestamp}.json"));

    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info.location().map(|loc| {
        serde_json::json!({
            "file": loc.file(),
            "line": loc.line(),
            "column": loc.column(),
        })
    });

    let backtrace = Backtrace::force_capture().to_string();

    let report = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": sanitize_urls(&message),
        "location": location,
        "backtrace": sanitize_urls(&backtrace),
    });

    let _ = std::fs::create_dir_all(&dir);
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
