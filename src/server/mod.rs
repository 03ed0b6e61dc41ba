//! HTTP server
//!
//! The thin routing layer over the poll store: request decoding, store
//! dispatch, and status-code mapping.

pub mod http;

pub use http::{router, serve, AppState, ServeError};
