//! API layer - HTTP entry points.

pub mod auth;
pub mod extract;
pub mod http;
