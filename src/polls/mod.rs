//! Poll Store
//!
//! The concurrent poll-and-vote store: a registry of polls keyed by
//! identifier, each holding a fixed option set with a running tally per
//! option. Everything is in-memory and lost on restart by design.

pub mod error;
pub mod poll;
pub mod store;

pub use error::PollError;
pub use poll::Poll;
pub use store::{create_store, PollStore};
