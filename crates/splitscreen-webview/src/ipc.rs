//! IPC protocol between pane/overlay JavaScript and the host.
//!
//! - **JS -> Rust**: `window.splitscreen.ipc.send(kind, payload)` posts
//!   `{kind, payload}` through `window.ipc.postMessage`.
//! - **Rust -> JS**: the host evaluates [`js_dispatch_message`] to invoke a
//!   handler registered with `window.splitscreen.ipc.on(kind, cb)`.
//!
//! Two message kinds are understood: `"interaction"` (payload: an
//! interaction name such as `"touch"`) and `"action"` (payload: a serialized
//! [`Action`]).

use serde::{Deserialize, Serialize};
use splitscreen_common::{Action, InteractionKind};

/// Message kind for user-activity reports from pane pages.
pub const KIND_INTERACTION: &str = "interaction";
/// Message kind for menu actions from the overlay.
pub const KIND_ACTION: &str = "action";
/// Message kind the host uses to push menu state to the overlay.
pub const KIND_MENU_STATE: &str = "menu_state";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: either a simple string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
}

impl Default for IpcPayload {
    fn default() -> Self {
        IpcPayload::Json(serde_json::Value::Null)
    }
}

impl IpcPayload {
    fn into_value(self) -> serde_json::Value {
        match self {
            IpcPayload::Text(s) => serde_json::Value::String(s),
            IpcPayload::Json(v) => v,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Convert into an [`Action`]. Unknown kinds or malformed payloads
    /// yield `None`.
    pub fn into_action(self) -> Option<Action> {
        match self.kind.as_str() {
            KIND_INTERACTION => serde_json::from_value::<InteractionKind>(self.payload.into_value())
                .ok()
                .map(Action::Interaction),
            KIND_ACTION => serde_json::from_value::<Action>(self.payload.into_value()).ok(),
            _ => None,
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into every WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.splitscreen = window.splitscreen || {};
    if (window.splitscreen.ipc) { return; }
    window.splitscreen.ipc = {
        send: function(kind, payload) {
            if (!window.ipc || !window.ipc.postMessage) { return; }
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate JavaScript that dispatches a message to a JS handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let kind_json = serde_json::Value::String(kind.to_string());
    format!("window.splitscreen && window.splitscreen.ipc && window.splitscreen.ipc._dispatch({kind_json}, {payload});")
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitscreen_common::PaneIndex;

    #[test]
    fn interaction_message_becomes_action() {
        let msg = IpcMessage::from_json(r#"{"kind":"interaction","payload":"touch"}"#).unwrap();
        assert_eq!(
            msg.into_action(),
            Some(Action::Interaction(InteractionKind::Touch))
        );
    }

    #[test]
    fn pointer_move_uses_snake_case() {
        let msg =
            IpcMessage::from_json(r#"{"kind":"interaction","payload":"pointer_move"}"#).unwrap();
        assert_eq!(
            msg.into_action(),
            Some(Action::Interaction(InteractionKind::PointerMove))
        );
    }

    #[test]
    fn action_message_with_payload_struct() {
        let msg = IpcMessage::from_json(r#"{"kind":"action","payload":{"SetPaneCount":3}}"#)
            .unwrap();
        assert_eq!(msg.into_action(), Some(Action::SetPaneCount(3)));

        let msg =
            IpcMessage::from_json(r#"{"kind":"action","payload":{"RefreshPane":1}}"#).unwrap();
        assert_eq!(msg.into_action(), Some(Action::RefreshPane(PaneIndex(1))));
    }

    #[test]
    fn unit_action_arrives_as_text_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"action","payload":"ToggleMenu"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Text(_)));
        assert_eq!(msg.into_action(), Some(Action::ToggleMenu));
    }

    #[test]
    fn missing_payload_defaults_to_null() {
        let msg = IpcMessage::from_json(r#"{"kind":"action"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Json(serde_json::Value::Null)));
        assert_eq!(msg.into_action(), None);
    }

    #[test]
    fn unknown_kind_or_garbage_is_ignored() {
        let msg = IpcMessage::from_json(r#"{"kind":"clipboard","payload":"x"}"#).unwrap();
        assert_eq!(msg.into_action(), None);
        let msg = IpcMessage::from_json(r#"{"kind":"interaction","payload":"dance"}"#).unwrap();
        assert_eq!(msg.into_action(), None);
        assert!(IpcMessage::from_json("not json").is_none());
    }

    #[test]
    fn dispatch_script_quotes_kind() {
        let js = js_dispatch_message(KIND_MENU_STATE, &serde_json::json!({"pane_count": 2}));
        assert!(js.contains(r#"_dispatch("menu_state", {"pane_count":2})"#));
    }

    #[test]
    fn init_script_exposes_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.splitscreen.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("postMessage"));
    }
}
