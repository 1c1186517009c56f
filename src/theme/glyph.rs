//! Indicator artwork for the toggle control.
//!
//! The glyph names the theme the user would switch *to*: a dark page shows
//! the sun, a light page shows the moon. Both are Lucide icons stroked with
//! `currentColor` so the surrounding CSS decides their colour.

use super::Theme;

const SUN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-sun"><circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/></svg>"#;

const MOON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-moon"><path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/></svg>"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
}

impl Glyph {
    pub const ALL: [Glyph; 2] = [Glyph::Sun, Glyph::Moon];

    /// Glyph shown while `theme` is active
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Glyph::Sun,
            Theme::Light => Glyph::Moon,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Sun => "sun",
            Glyph::Moon => "moon",
        }
    }

    pub fn svg(&self) -> &'static str {
        match self {
            Glyph::Sun => SUN_SVG,
            Glyph::Moon => MOON_SVG,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }
}
