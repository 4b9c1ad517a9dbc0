//! Async MySQL access for overseer plugins.
//!
//! Opens a pooled connection from plugin configuration and exposes
//! fire-and-forget helpers that run each statement on a background task,
//! so plugin code never blocks the main server thread on the database.

pub mod config;
pub mod db;
pub mod error;
pub mod params;

pub use config::DbConfig;
pub use db::Database;
pub use error::{DbError, Result};
pub use params::{bind_params, SqlParam};
