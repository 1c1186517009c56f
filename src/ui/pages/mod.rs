//! Page components, one per route.

pub mod index;
pub mod not_found;

pub use index::IndexPage;
pub use not_found::NotFoundPage;
