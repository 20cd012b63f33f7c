/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
    /// Scripts run in every new document after the IPC bridge.
    pub init_scripts: Vec<String>,
    /// Also run the bridge and `init_scripts` in subframes (iframes).
    pub subframes: bool,
    /// Refuse `window.open` and `target=_blank` popups.
    pub block_popups: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            autoplay: true,
            init_scripts: Vec::new(),
            subframes: false,
            block_popups: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    pub fn init_script(mut self, js: impl Into<String>) -> Self {
        self.init_scripts.push(js.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_config_defaults() {
        let cfg = WebViewConfig::with_url("https://example.com");
        assert_eq!(cfg.url.as_deref(), Some("https://example.com"));
        assert!(cfg.html.is_none());
        assert!(cfg.autoplay);
        assert!(cfg.block_popups);
        assert!(!cfg.subframes);
        assert!(cfg.init_scripts.is_empty());
    }

    #[test]
    fn init_scripts_keep_order() {
        let cfg = WebViewConfig::with_html("<p>menu</p>")
            .init_script("a()")
            .init_script("b()");
        assert_eq!(cfg.init_scripts, vec!["a()".to_string(), "b()".to_string()]);
    }
}
