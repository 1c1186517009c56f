//! Web UI - server-rendered pages carrying the theme toggle
//!
//! - components/ - Shared Dioxus components (layout, theme toggle)
//! - pages/ - Page components
//!
//! Every page is rendered with the visitor's stored marker already on
//! `<html>`; client code (inline script or the wasm controller) takes over
//! from there.

pub mod components;
pub mod pages;

#[cfg(feature = "server")]
pub use server::{index_page, not_found_page, render_document};

#[cfg(feature = "server")]
mod server {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{Html, IntoResponse},
    };
    use axum_extra::extract::cookie::CookieJar;
    use dioxus::prelude::*;

    use super::pages::{IndexPage, NotFoundPage};
    use crate::api::AppState;
    use crate::theme::Theme;

    /// Wrap SSR output in a document whose root carries exactly one theme marker
    pub fn render_document(body: Element, theme: Theme) -> String {
        let html = dioxus::ssr::render_element(body);
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\" class=\"{}\">\n{}</html>",
            theme.marker(),
            html
        )
    }

    /// GET / - Landing page
    pub async fn index_page(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
        let theme = state.theme_for(&jar).await;
        Html(render_document(rsx! { IndexPage { theme: theme } }, theme))
    }

    /// Fallback - 404 page in the visitor's theme
    pub async fn not_found_page(
        State(state): State<AppState>,
        jar: CookieJar,
    ) -> impl IntoResponse {
        let theme = state.theme_for(&jar).await;
        (
            StatusCode::NOT_FOUND,
            Html(render_document(rsx! { NotFoundPage { theme: theme } }, theme)),
        )
    }

}
