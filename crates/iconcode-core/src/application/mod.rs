//! Application layer for Iconcode.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (IconCodeConverter, ProfileService, BatchService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Convenience**: One-call helpers over a default converter
//! - **Errors**: Application-specific error types
//!
//! Parsing and rendering rules live in `crate::domain`.

pub mod convenience;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BatchReport, BatchService, IconCodeConverter, ProfileService};

// Re-export port traits (for adapter implementation)
pub use ports::{FontProfileStore, IconCodeSource};

pub use error::ApplicationError;
