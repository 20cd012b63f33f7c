pub mod actions;
pub mod errors;
pub mod types;

pub use actions::{Action, InteractionKind};
pub use errors::{ConfigError, PlatformError, SplitscreenError};
pub use types::{PaneIndex, Rect, MAX_PANES};
