//! Adapters - Presentation-layer implementations.
//!
//! Adapters connect the domain to the outside world:
//! - `http` - REST API exposure of the scoring engine

pub mod http;

pub use http::app_router;
