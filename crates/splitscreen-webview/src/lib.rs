//! WebView layer for Splitscreen panes.
//!
//! - [`Renderer`]: the three commands the core needs from an embedded browser
//! - [`PaneController`]: per-pane mute intent, reset/refresh, move-video
//! - [`scripts`]: the injected in-page script and the mute settle sequence
//! - [`manager`]: the `wry` adapter implementing [`Renderer`]
//! - [`ipc`]: page -> host messages (interactions, overlay menu actions)

pub mod events;
pub mod ipc;
pub mod manager;
pub mod pane;
pub mod renderer;
pub mod scripts;

pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use pane::PaneController;
pub use renderer::{Renderer, RendererError};
pub use scripts::{MuteSequence, MuteTimings, PageScriptOptions};
