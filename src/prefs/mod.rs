//! Server-side theme preferences, keyed by visitor.
//!
//! Pages are rendered with the visitor's marker already on `<html>`, so the
//! server keeps its own copy of each visitor's last choice. Each record has:
//! - Theme (light/dark)
//! - Last update time

pub mod store;

pub use store::{new_visitor_id, PreferenceStore, StoreError, StoredPreference};
