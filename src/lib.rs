//! Articles API - CRUD backend for articles, authors and regions
//!
//! Articles carry an optional author and any number of regions. Both
//! relationships can be written inline in an article payload: authors and
//! regions are looked up by id and created when missing.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and their wire formats
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories, unit of work)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Load sample data
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Article, Author, Region};
pub use errors::{AppError, AppResult};
pub use infra::Database;
