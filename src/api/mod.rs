//! HTTP API handlers

pub mod visitor;

use crate::config::CookieConfig;
use crate::icons;
use crate::prefs::{new_visitor_id, PreferenceStore};
use crate::theme::Theme;
use crate::ui;
use axum::{
    extract::{Form, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub prefs: PreferenceStore,
    pub cookie: CookieConfig,
}

impl AppState {
    pub fn new(prefs: PreferenceStore, cookie: CookieConfig) -> Self {
        Self { prefs, cookie }
    }

    /// Visitor id carried by the request, if any
    pub fn visitor(&self, jar: &CookieJar) -> Option<String> {
        visitor::visitor_id(jar, &self.cookie.name)
    }

    /// Theme to render for the request's visitor
    pub async fn theme_for(&self, jar: &CookieJar) -> Theme {
        let visitor = self.visitor(jar);
        self.prefs.theme_for(visitor.as_deref()).await
    }
}

/// Build the application router with middleware applied
pub fn router(state: AppState) -> Router {
    Router::new()
        // Web UI
        .route("/", get(ui::index_page))
        // Health check
        .route("/status", get(status_handler))
        // Theme preference
        .route("/api/theme", get(get_theme_handler).post(set_theme_handler))
        // Icons
        .route("/icons/{name}", get(icon_handler))
        .fallback(ui::not_found_page)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub preferences: usize,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "theme-toggle",
        version: env!("THEME_VERSION"),
        git_sha: env!("THEME_GIT_SHA"),
        preferences: state.prefs.len().await,
    })
}

// =============================================================================
// Theme handlers
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub success: bool,
}

impl ThemeResponse {
    fn rejected() -> Self {
        Self {
            theme: Theme::default(),
            success: false,
        }
    }
}

/// GET /api/theme - Visitor's stored theme (default dark)
pub async fn get_theme_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: state.theme_for(&jar).await,
        success: true,
    })
}

/// POST /api/theme - Store the visitor's choice and (re)issue the visitor cookie
pub async fn set_theme_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ThemeForm>,
) -> Response {
    let theme = match form.theme.parse::<Theme>() {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!("Rejected theme update: {}", e);
            return Json(ThemeResponse::rejected()).into_response();
        }
    };

    let visitor = state.visitor(&jar).unwrap_or_else(new_visitor_id);

    if let Err(e) = state.prefs.set(&visitor, theme).await {
        tracing::warn!("Failed to store theme preference: {}", e);
        return Json(ThemeResponse::rejected()).into_response();
    }

    // Sliding expiry: the cookie outlives the record only while the visitor keeps choosing
    let jar = jar.add(visitor::visitor_cookie(&state.cookie, &visitor));
    (
        jar,
        Json(ThemeResponse {
            theme,
            success: true,
        }),
    )
        .into_response()
}

// =============================================================================
// Icon handlers
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct IconQuery {
    pub classes: Option<String>,
}

/// GET /icons/{name} - Indicator glyph as standalone SVG
pub async fn icon_handler(Path(name): Path<String>, Query(query): Query<IconQuery>) -> Response {
    let name = name.strip_suffix(".svg").unwrap_or(&name);
    let Some(svg) = icons::icon_svg(name) else {
        return (StatusCode::NOT_FOUND, "Icon not found").into_response();
    };

    let classes = query.classes.unwrap_or_default();
    let styled = icons::add_classes_to_svg(svg, &classes);
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        styled.into_owned(),
    )
        .into_response()
}
