//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Field Limits
// =============================================================================

/// Maximum length of an article title
pub const MAX_TITLE_LENGTH: u32 = 255;

/// Maximum length of an author's first or last name
pub const MAX_NAME_LENGTH: u32 = 255;

/// Maximum length of a region code or name
pub const MAX_REGION_FIELD_LENGTH: u32 = 255;

/// Author value that clears the relationship when sent as a string
pub const NULL_AUTHOR_LITERAL: &str = "null";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://articles.db?mode=rwc";

/// In-memory SQLite URL used by tests
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";
