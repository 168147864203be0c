pub mod handlers;
pub mod routes;
pub mod session;
pub mod templates;

// Re-export commonly used types
pub use routes::{WebRouteDependencies, configure_web_routes};
pub use templates::TemplateEngine;
