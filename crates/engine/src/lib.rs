//! The Paradox Wheel engine library.
//!
//! Server-side code for the character builder and its reference data.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the port traits
//! - `infrastructure/` - Port traits and their SQLite adapters
//! - `api/` - HTTP entry points and the admin gate
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
