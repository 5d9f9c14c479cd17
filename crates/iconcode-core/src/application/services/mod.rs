//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "convert this code" or "convert this file".

pub mod batch_service;
pub mod converter;
pub mod profile_service;

pub use batch_service::{BatchReport, BatchService};
pub use converter::IconCodeConverter;
pub use profile_service::ProfileService;
