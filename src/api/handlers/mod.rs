//! HTTP request handlers.

pub mod article_handler;
pub mod author_handler;
pub mod region_handler;

pub use article_handler::article_routes;
pub use author_handler::author_routes;
pub use region_handler::region_routes;
