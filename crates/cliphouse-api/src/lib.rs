//! Cliphouse API Library
//!
//! HTTP surface for the upload pipeline: auth middleware, multipart
//! negotiation and staging, handlers, and application setup.

mod api_doc;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod upload;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
