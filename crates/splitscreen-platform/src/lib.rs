pub mod crash_report;
pub mod idle;
pub mod paths;

pub use idle::{ChromeTransition, IdleState, IdleTicker, InteractionTracker};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};
