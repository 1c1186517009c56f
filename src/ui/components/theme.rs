//! Theme toggle button and its client-side scripts.

use dioxus::prelude::*;

use crate::theme::{Glyph, Theme};

/// Set on the toggle button by whichever client binds its click handler first
pub const BOUND_ATTR: &str = "data-theme-bound";

/// Which client drives the toggle button on a rendered page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleClient {
    /// Ship `THEME_TOGGLE_SCRIPT` with the page
    #[default]
    Inline,
    /// The host loads the wasm build and calls `start_theme_toggle()`
    Wasm,
}

/// Toggle button pre-rendered with the glyph for the server's view of the theme.
/// Both glyphs ride along as data attributes so the client never hardcodes markup.
#[component]
pub fn ThemeToggle(theme: Theme) -> Element {
    let glyph = Glyph::for_theme(theme);

    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            class: "theme-toggle",
            "aria-label": "Toggle light/dark theme",
            span {
                id: "theme-icon",
                "data-sun": Glyph::Sun.svg(),
                "data-moon": Glyph::Moon.svg(),
                dangerous_inner_html: glyph.svg(),
            }
        }
    }
}

/// Runs in `<head>` before first paint: swap the server-rendered marker for
/// the locally stored one so the page never flashes the wrong theme.
pub const THEME_BOOT_SCRIPT: &str = r#"
(function(){
    try {
        const t = localStorage.getItem('theme');
        if (t === 'light' || t === 'dark') {
            document.documentElement.classList.remove('light', 'dark');
            document.documentElement.classList.add(t);
        }
    } catch (e) {}
})();
"#;

/// Non-wasm client: same contract as the Rust controller. The active theme is
/// held in `theme`; the class list and icon are only ever written.
pub const THEME_TOGGLE_SCRIPT: &str = r#"
(function(){
    const root = document.documentElement;
    const toggle = document.getElementById('theme-toggle');
    const icon = document.getElementById('theme-icon');
    if (!toggle || !icon || toggle.dataset.themeBound) return;
    toggle.dataset.themeBound = 'inline';

    let stored = null;
    try { stored = localStorage.getItem('theme'); } catch (e) {}
    let theme = (stored === 'light' || stored === 'dark')
        ? stored
        : (root.classList.contains('light') ? 'light' : 'dark');

    function apply(t) {
        root.classList.remove('light', 'dark');
        root.classList.add(t);
    }
    function render(t) {
        icon.innerHTML = t === 'dark' ? icon.dataset.sun : icon.dataset.moon;
    }

    apply(theme);
    render(theme);

    toggle.addEventListener('click', () => {
        theme = theme === 'dark' ? 'light' : 'dark';
        apply(theme);
        try { localStorage.setItem('theme', theme); } catch (e) {}
        render(theme);
        fetch('/api/theme', {
            method: 'POST',
            headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
            body: new URLSearchParams({ theme }),
            credentials: 'same-origin'
        }).catch(() => {});
    });
})();
"#;
