//! Layout component wrapping all pages with the theme marker styles and toggle.

use dioxus::prelude::*;

use super::theme::{ThemeToggle, ToggleClient, THEME_BOOT_SCRIPT, THEME_TOGGLE_SCRIPT};
use crate::theme::Theme;

/// Colours for both markers. Anything else is left to the page.
const CUSTOM_STYLES: &str = r#"
:root.dark { --bg: #0f1115; --fg: #e6e6e6; --muted: #9aa0a6; }
:root.light { --bg: #ffffff; --fg: #1f2328; --muted: #57606a; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; }
.container { max-width: 48rem; margin: 0 auto; padding: 1rem; }
header.container { display: flex; justify-content: space-between; align-items: center; }
small { color: var(--muted); }
.theme-toggle { background: none; border: 0; color: inherit; cursor: pointer; padding: 0.25rem; }
.theme-toggle svg { display: block; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Theme the server believes is active for this visitor
    pub theme: Theme,
    /// Client that binds the toggle (inline script unless the host runs the wasm build)
    #[props(default)]
    pub client: ToggleClient,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("THEME_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Theme Toggle" }
            link { rel: "icon", r#type: "image/svg+xml", href: "/icons/sun" }
            style { {CUSTOM_STYLES} }
            script { dangerous_inner_html: THEME_BOOT_SCRIPT }
        }
        body {
            header { class: "container",
                strong { "Theme Toggle" }
                ThemeToggle { theme: props.theme }
            }
            main { class: "container",
                {props.children}
            }
            footer { class: "container",
                small { "Theme Toggle v{version}" }
            }
            if props.client == ToggleClient::Inline {
                script { dangerous_inner_html: THEME_TOGGLE_SCRIPT }
            }
        }
    }
}
