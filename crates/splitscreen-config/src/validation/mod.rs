//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod panes;
mod timing;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::SplitscreenConfig;
use splitscreen_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SplitscreenConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    panes::validate_panes(&mut errors, config);
    timing::validate_timing(&mut errors, config);
    window::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
