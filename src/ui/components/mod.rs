//! Shared UI components for the server-rendered pages.

pub mod layout;
pub mod theme;

pub use layout::Layout;
pub use theme::{ThemeToggle, ToggleClient};
