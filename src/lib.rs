//! Async Inn back office.
//!
//! Server-rendered pages to manage hotels, rooms, amenities and the
//! associations between them, stored in SQLite.

pub mod config;
pub mod csrf;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod views;

pub use handlers::configure;
