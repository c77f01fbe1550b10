//! # Talos Infrastructure
//!
//! Concrete implementations of the ports defined in `talos-core`.
//! This crate contains the post store and the external user-directory client.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL store via SeaORM
//! - `http-directory` - User directory lookups over HTTP via reqwest

pub mod database;

#[cfg(feature = "http-directory")]
pub mod directory;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

#[cfg(feature = "http-directory")]
pub use directory::HttpUserDirectory;
