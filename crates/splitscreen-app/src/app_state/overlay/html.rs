use super::metrics::{
    BUTTON_GAP, BUTTON_HEIGHT, BUTTON_WIDTH, MENU_PADDING_X, MENU_PADDING_Y, MENU_TOP, ROW_GAP,
    TITLE_WIDTH,
};

/// Overlay document. Rendering is driven entirely by `menu_state` pushes.
pub(crate) fn overlay_html() -> String {
    OVERLAY_TEMPLATE
        .replace("__MENU_TOP__", &MENU_TOP.to_string())
        .replace("__PAD_X__", &MENU_PADDING_X.to_string())
        .replace("__PAD_Y__", &MENU_PADDING_Y.to_string())
        .replace("__ROW_GAP__", &ROW_GAP.to_string())
        .replace("__TITLE_W__", &TITLE_WIDTH.to_string())
        .replace("__BUTTON_W__", &BUTTON_WIDTH.to_string())
        .replace("__BUTTON_H__", &BUTTON_HEIGHT.to_string())
        .replace("__BUTTON_GAP__", &BUTTON_GAP.to_string())
}

const OVERLAY_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
    html, body {
        margin: 0;
        padding: 0;
        background: transparent;
        font: 14px -apple-system, "Segoe UI", Roboto, sans-serif;
        color: #fff;
        overflow: hidden;
        user-select: none;
        -webkit-user-select: none;
    }
    #gear {
        position: absolute;
        top: 0;
        right: 0;
        width: 52px;
        height: 52px;
        border: none;
        border-radius: 26px;
        background: rgba(0, 0, 0, 0.55);
        color: #fff;
        font-size: 28px;
        cursor: pointer;
    }
    #menu {
        position: absolute;
        top: __MENU_TOP__px;
        right: 0;
        padding: __PAD_Y__px __PAD_X__px;
        border-radius: 12px;
        background: rgba(20, 20, 20, 0.85);
        display: none;
    }
    #menu.open { display: block; }
    .row {
        display: flex;
        flex-wrap: nowrap;
        align-items: center;
        height: __BUTTON_H__px;
        margin: __ROW_GAP__px 0;
    }
    .title {
        flex: none;
        width: __TITLE_W__px;
        white-space: nowrap;
        overflow: hidden;
        opacity: 0.75;
    }
    .row button {
        flex: none;
        box-sizing: border-box;
        width: __BUTTON_W__px;
        height: __BUTTON_H__px;
        margin: 0 __BUTTON_GAP__px 0 0;
        padding: 0 4px;
        white-space: nowrap;
        overflow: hidden;
        border: 1px solid rgba(255, 255, 255, 0.25);
        border-radius: 6px;
        background: transparent;
        color: #fff;
        cursor: pointer;
    }
    .row button.selected { background: #fff; color: #000; }
</style>
</head>
<body>
<button id="gear" aria-label="Menu">&#9881;</button>
<div id="menu"></div>
<script>
(function() {
    var gear = document.getElementById('gear');
    var menu = document.getElementById('menu');

    function send(action) {
        if (window.splitscreen && window.splitscreen.ipc) {
            window.splitscreen.ipc.send('action', action);
        }
    }

    gear.addEventListener('click', function() { send('ToggleMenu'); });

    function render(view) {
        if (!view) { return; }
        menu.className = view.menu_open ? 'open' : '';
        menu.innerHTML = '';
        (view.rows || []).forEach(function(row) {
            var el = document.createElement('div');
            el.className = 'row';
            var title = document.createElement('span');
            title.className = 'title';
            title.textContent = row.title;
            el.appendChild(title);
            row.buttons.forEach(function(b) {
                var btn = document.createElement('button');
                btn.textContent = b.label;
                if (b.selected) { btn.className = 'selected'; }
                btn.addEventListener('click', function() { send(b.action); });
                el.appendChild(btn);
            });
            menu.appendChild(el);
        });
    }

    if (window.splitscreen && window.splitscreen.ipc) {
        window.splitscreen.ipc.on('menu_state', render);
    }
})();
</script>
</body>
</html>
"##;
