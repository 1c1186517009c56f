//! Landing page.

use dioxus::prelude::*;

use crate::theme::Theme;
use crate::ui::components::Layout;

#[component]
pub fn IndexPage(theme: Theme) -> Element {
    rsx! {
        Layout {
            title: "Home".to_string(),
            theme: theme,

            h1 { "Hello" }
            p { "Use the button in the corner to switch between light and dark." }
            p {
                small { "Your choice is remembered in this browser and on the server." }
            }
        }
    }
}
