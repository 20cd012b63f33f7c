use std::cell::RefCell;

use splitscreen_common::PaneIndex;
use splitscreen_webview::{MuteTimings, PaneController, Renderer, RendererError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Navigate(String),
    Script(String),
    Reload,
}

/// Renderer that records every call.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    calls: RefCell<Vec<Call>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn script_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Script(_)))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn navigate(&mut self, url: &str) -> Result<(), RendererError> {
        self.calls.borrow_mut().push(Call::Navigate(url.to_string()));
        Ok(())
    }

    fn execute_script(&self, js: &str) -> Result<(), RendererError> {
        self.calls.borrow_mut().push(Call::Script(js.to_string()));
        Ok(())
    }

    fn reload(&self) -> Result<(), RendererError> {
        self.calls.borrow_mut().push(Call::Reload);
        Ok(())
    }
}

/// Four panes, all muted, as created at startup.
pub(crate) fn recording_panes(url: &str) -> Vec<PaneController<RecordingRenderer>> {
    (0..splitscreen_common::MAX_PANES)
        .map(|i| {
            PaneController::new(
                PaneIndex(i),
                RecordingRenderer::default(),
                url,
                true,
                MuteTimings::default(),
            )
        })
        .collect()
}
