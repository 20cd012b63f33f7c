/// Build-time settings for the injected page script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScriptOptions {
    /// Initial mute intent.
    pub muted: bool,
    /// Period of the video scan loop.
    pub poll_interval_ms: u32,
    /// CSS selectors hidden once the DOM is ready.
    pub hidden_selectors: Vec<String>,
    /// Post touch/scroll/pointer activity back to the host.
    pub report_interactions: bool,
    /// Minimum spacing between two interaction reports.
    pub interaction_throttle_ms: u32,
}

impl Default for PageScriptOptions {
    fn default() -> Self {
        Self {
            muted: true,
            poll_interval_ms: 1000,
            hidden_selectors: vec![".site-nav".into()],
            report_interactions: true,
            interaction_throttle_ms: 250,
        }
    }
}

const PAGE_SCRIPT_TEMPLATE: &str = r#"
(function() {
    var root = window.splitscreen = window.splitscreen || {};
    if (root.page) { return; }
    var page = root.page = {
        muted: __MUTED__,
        moved: false,
        wasPlaying: false,
        lastReport: 0
    };
    var nested = window !== window.top;

    // Host scripts only reach the top document; embedded players follow it.
    function relay(message) {
        try {
            for (var i = 0; i < window.frames.length; i++) {
                window.frames[i].postMessage({ splitscreen: message }, '*');
            }
        } catch (e) {}
    }

    function videos() {
        return document.getElementsByTagName('video');
    }

    function isPlaying(video) {
        return !video.paused && !video.ended && video.readyState > 2;
    }

    page.moveVideo = function() {
        try {
            var list = videos();
            if (!list.length || !document.body) { return; }
            var video = list[0];
            document.body.appendChild(video);
            video.style.backgroundColor = '#000';
        } catch (e) {}
    };

    page.resume = function() {
        try {
            var list = videos();
            relay({ resume: true });
            if (!list.length) { return; }
            var played = list[list.length - 1].play();
            if (played && played.catch) { played.catch(function() {}); }
        } catch (e) {}
    };

    function decorate() {
        try {
            __SELECTORS__.forEach(function(selector) {
                var nodes = document.querySelectorAll(selector);
                for (var i = 0; i < nodes.length; i++) {
                    nodes[i].style.display = 'none';
                }
            });
            if (document.body) {
                document.body.style.setProperty('background-color', '#000', 'important');
            }
        } catch (e) {}
    }

    function scan() {
        try {
            decorate();
            var list = videos();
            var playing = false;
            for (var i = 0; i < list.length; i++) {
                var video = list[i];
                video.muted = page.muted;
                video.playsInline = true;
                video.setAttribute('playsinline', '');
                if (isPlaying(video)) { playing = true; }
            }
            if (playing) {
                var el = document.scrollingElement || document.documentElement;
                if (el) { window.scrollTo(0, el.scrollHeight); }
                if (!page.wasPlaying && !page.moved) {
                    page.moved = true;
                    page.moveVideo();
                }
            }
            page.wasPlaying = playing;
            relay({ muted: page.muted });
        } catch (e) {}
    }

    function follow(event) {
        if (!nested || event.source !== window.parent) { return; }
        var message = event.data && event.data.splitscreen;
        if (!message) { return; }
        if (typeof message.muted === 'boolean' && message.muted !== page.muted) {
            page.muted = message.muted;
            scan();
        }
        if (message.resume) { page.resume(); }
    }

    // Programmatic scrolling above would feed back as activity, so only
    // direct input is reported.
    function report(kind) {
        if (!__REPORT__ || !root.ipc) { return; }
        var now = Date.now();
        if (now - page.lastReport < __THROTTLE_MS__) { return; }
        page.lastReport = now;
        root.ipc.send('interaction', kind);
    }

    function listen() {
        var opts = { passive: true, capture: true };
        window.addEventListener('touchstart', function() { report('touch'); }, opts);
        window.addEventListener('touchmove', function() { report('scroll'); }, opts);
        window.addEventListener('wheel', function() { report('scroll'); }, opts);
        window.addEventListener('pointermove', function() { report('pointer_move'); }, opts);
    }

    function start() {
        scan();
        setInterval(scan, __POLL_MS__);
        listen();
        window.addEventListener('message', follow);
    }

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', start);
    } else {
        start();
    }
})();
"#;

/// Render the per-pane initialization script.
///
/// Installs `window.splitscreen.page` with the mute flag plus `moveVideo()`
/// and `resume()`, hides `hidden_selectors`, and starts the scan loop that
/// enforces the flag on every `<video>`. Running it twice in one document
/// is a no-op.
///
/// When injected into subframes too, each document relays its flag and
/// resume requests to its child frames on every scan, so a player inside an
/// iframe follows the top document within one poll interval.
pub fn page_script(opts: &PageScriptOptions) -> String {
    let selectors = serde_json::to_string(&opts.hidden_selectors).unwrap_or_else(|_| "[]".into());
    PAGE_SCRIPT_TEMPLATE
        .replace("__MUTED__", if opts.muted { "true" } else { "false" })
        .replace("__SELECTORS__", &selectors)
        .replace(
            "__REPORT__",
            if opts.report_interactions { "true" } else { "false" },
        )
        .replace("__THROTTLE_MS__", &opts.interaction_throttle_ms.to_string())
        .replace("__POLL_MS__", &opts.poll_interval_ms.max(1).to_string())
}
