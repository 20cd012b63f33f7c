//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the menu store, pane webviews, the
//! overlay and the idle ticker.

mod bounds;
mod chrome;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod ipc_dispatch;
mod menu;
mod mute;
mod overlay;
mod panes;
mod polling;
mod shutdown;
#[cfg(test)]
mod test_support;
mod types;

pub use core::SplitscreenApp;
