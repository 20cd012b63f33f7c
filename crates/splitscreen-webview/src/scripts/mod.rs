//! JavaScript injected into pane webviews.

mod commands;
mod mute;
mod page;

pub use commands::{apply_intent_script, move_video_script};
pub use mute::{MuteSequence, MuteStep, MuteStepAction, MuteTimings};
pub use page::{page_script, PageScriptOptions};

/// Expression resolving the in-page state object, or `undefined` before
/// the page script has run.
pub(crate) const PAGE_HANDLE: &str = "(window.splitscreen && window.splitscreen.page)";
