//! HTTP surface for the conversion-banner decision engine.
//!
//! The hosting site calls the decision endpoint once per page view and
//! renders (or suppresses) the hero and sticky bar from the response.

pub mod api;
pub mod middleware;

pub use api::{build_app, AppState};
