//! Theme model and the controller that keeps the page consistent with it.
//!
//! Provides:
//! - `Theme` - the two display modes (light/dark)
//! - `Glyph` - the indicator artwork shown on the toggle control
//! - `ThemeController` - owns the active theme and projects it onto injected ports

pub mod controller;
pub mod glyph;

pub use controller::{ActivationSource, IndicatorSink, MarkerSink, PreferencePort, ThemeController};
pub use glyph::Glyph;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key of the persisted record in client-side storage
pub const STORAGE_KEY: &str = "theme";

/// Every marker the controller owns on the display surface
pub const MARKERS: [&str; 2] = ["light", "dark"];

/// Errors raised at the theme ports
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    Unknown(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("element not found: #{0}")]
    MissingElement(&'static str),
}

/// Display mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lenient parse used when reading stored values: anything unrecognised is the default.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Marker class placed on the display surface
    pub fn marker(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
