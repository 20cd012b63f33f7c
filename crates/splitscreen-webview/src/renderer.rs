//! The embedded-browser seam.
//!
//! Pane logic talks to this trait only; [`crate::WebViewHandle`] implements
//! it over `wry`, tests implement it with a recorder.

/// Failure reported by a renderer backend.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("renderer backend error: {0}")]
    Backend(String),
}

impl From<wry::Error> for RendererError {
    fn from(e: wry::Error) -> Self {
        RendererError::Backend(e.to_string())
    }
}

/// Commands accepted by an embedded web renderer.
///
/// All three are fire-and-forget: the renderer acts asynchronously and
/// script results are never read back.
pub trait Renderer {
    /// Load `url`, discarding the current document.
    fn navigate(&mut self, url: &str) -> Result<(), RendererError>;

    /// Evaluate `js` in the current document.
    fn execute_script(&self, js: &str) -> Result<(), RendererError>;

    /// Reload the current document in place.
    fn reload(&self) -> Result<(), RendererError>;
}
