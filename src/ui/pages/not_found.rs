//! 404 page, rendered in the visitor's theme like every other page.

use dioxus::prelude::*;

use crate::theme::Theme;
use crate::ui::components::Layout;

#[component]
pub fn NotFoundPage(theme: Theme) -> Element {
    rsx! {
        Layout {
            title: "Not Found".to_string(),
            theme: theme,

            h1 { "404 - Page Not Found" }
            p {
                a { href: "/", "Back to the start" }
            }
        }
    }
}
