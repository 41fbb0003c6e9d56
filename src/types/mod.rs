//! Shared response types used across handlers.

mod response;

pub use response::{Created, MessageResponse};
