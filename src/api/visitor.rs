//! Anonymous visitor identity carried in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config::CookieConfig;

/// Longest id accepted from a client
const MAX_ID_LEN: usize = 64;

/// Visitor id from the request's cookies, if present and well formed
pub fn visitor_id(jar: &CookieJar, cookie_name: &str) -> Option<String> {
    jar.get(cookie_name)
        .map(Cookie::value)
        .filter(|value| is_valid_id(value))
        .map(str::to_string)
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_ID_LEN && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Cookie issuing `id` to the visitor. Re-sent on every write so the expiry slides.
pub fn visitor_cookie(settings: &CookieConfig, id: &str) -> Cookie<'static> {
    Cookie::build((settings.name.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(settings.secure)
        .max_age(Duration::days(i64::from(settings.max_age_days)))
        .build()
}
