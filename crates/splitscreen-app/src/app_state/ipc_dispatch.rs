//! IPC message validation and dispatch from webviews to actions.

use splitscreen_webview::ipc::{KIND_ACTION, KIND_INTERACTION};
use splitscreen_webview::IpcMessage;

use super::core::SplitscreenApp;
use super::types::OVERLAY_VIEW_ID;

/// Kinds a pane page may send. Third-party pages only report activity.
const PANE_IPC_KINDS: &[&str] = &[KIND_INTERACTION];

/// Kinds the overlay may send.
const OVERLAY_IPC_KINDS: &[&str] = &[KIND_INTERACTION, KIND_ACTION];

/// Check whether `kind` is accepted from webview `view_id`.
pub(super) fn is_ipc_kind_allowed(view_id: u32, kind: &str) -> bool {
    if view_id == OVERLAY_VIEW_ID {
        OVERLAY_IPC_KINDS.contains(&kind)
    } else {
        PANE_IPC_KINDS.contains(&kind)
    }
}

impl SplitscreenApp {
    /// Handle a single IPC message from a webview.
    pub(super) fn handle_ipc_message(&mut self, view_id: u32, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            tracing::warn!(
                view_id,
                body_len = body.len(),
                "IPC message rejected: failed to parse"
            );
            return;
        };

        if !is_ipc_kind_allowed(view_id, &msg.kind) {
            tracing::warn!(view_id, kind = %msg.kind, "IPC message rejected: kind not allowed");
            return;
        }

        let kind = msg.kind.clone();
        match msg.into_action() {
            Some(action) => {
                tracing::trace!(view_id, ?action, "IPC action");
                self.dispatch(action);
            }
            None => {
                tracing::warn!(view_id, kind = %kind, "IPC message rejected: bad payload");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitscreen_common::Action;

    #[test]
    fn panes_may_only_report_interactions() {
        assert!(is_ipc_kind_allowed(0, KIND_INTERACTION));
        assert!(!is_ipc_kind_allowed(0, KIND_ACTION));
        assert!(!is_ipc_kind_allowed(3, KIND_ACTION));
    }

    #[test]
    fn overlay_may_send_actions() {
        assert!(is_ipc_kind_allowed(OVERLAY_VIEW_ID, KIND_ACTION));
        assert!(is_ipc_kind_allowed(OVERLAY_VIEW_ID, KIND_INTERACTION));
        assert!(!is_ipc_kind_allowed(OVERLAY_VIEW_ID, "eval"));
    }

    #[test]
    fn overlay_action_reaches_the_menu() {
        let mut app = SplitscreenApp::new(Default::default());
        app.handle_ipc_message(OVERLAY_VIEW_ID, r#"{"kind":"action","payload":{"SetPaneCount":3}}"#);
        assert_eq!(app.menu.state().pane_count, 3);
    }

    #[test]
    fn pane_cannot_change_menu_state() {
        let mut app = SplitscreenApp::new(Default::default());
        app.handle_ipc_message(1, r#"{"kind":"action","payload":"ToggleMenu"}"#);
        assert!(app.menu.state().menu_open);
    }

    #[test]
    fn pane_interaction_wakes_idle_chrome() {
        let mut app = SplitscreenApp::new(Default::default());
        app.dispatch(Action::ToggleMenu);
        let later = std::time::Instant::now() + std::time::Duration::from_secs(30);
        app.menu.tick(later);
        assert!(!app.menu.chrome_visible());

        app.handle_ipc_message(2, r#"{"kind":"interaction","payload":"touch"}"#);
        assert!(app.menu.chrome_visible());
    }
}
