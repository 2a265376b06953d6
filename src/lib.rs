//! rxlookup - drug classification lookup service
//!
//! Aggregates RxClass relationship data per drug, caches results in memory,
//! and serves them over HTTP with spreadsheet export and speech playback.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod lookup;
pub mod server;
pub mod speech;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use server::run_server;
