//! Persistence layer for the Solary server.
//!
//! SQLite-backed storage for users, subscriptions, locations, and solar
//! samples, plus the repository implementation handed to the core router.

pub mod db;
pub mod locations;
pub mod repository;
pub mod samples;
pub mod users;

pub use db::{init_database, Database};
pub use repository::SqliteRepository;
