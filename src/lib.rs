//! Theme Toggle
//!
//! Light/dark theme switching with a persisted preference.
//!
//! This library provides:
//! - `ThemeController`, driving any display surface through injected ports
//! - Browser bindings for the controller (wasm32)
//! - Server-side visitor preferences and an HTTP API for them
//! - Server-rendered pages carrying the toggle (Dioxus SSR)

pub mod icons;
pub mod theme;
pub mod ui;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod prefs;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;
