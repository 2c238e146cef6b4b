//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod build;
pub mod content;
pub mod management;
pub mod validation;

pub use build::BuildOps;
pub use content::ContentOps;
pub use management::{ManagementError, ManagementUseCases};
