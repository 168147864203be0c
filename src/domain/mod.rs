pub mod auth;
pub mod lending;
