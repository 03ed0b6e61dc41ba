//! pollbox library
//!
//! An in-memory voting service: a concurrent poll-and-vote store plus the
//! HTTP API, CLI, and configuration around it. Polls live for the process
//! lifetime only; there is no persistence by design.

pub mod cli;
pub mod config;
pub mod logging;
pub mod polls;
pub mod server;
