//! Infrastructure adapters for Iconcode.
//!
//! This crate implements the ports defined in `iconcode-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_profiles;
pub mod profile_loader;
pub mod profile_store;
pub mod source;

// Re-export commonly used adapters
pub use profile_loader::TomlProfileLoader;
pub use profile_store::InMemoryProfileStore;
pub use source::{FileCodeSource, InMemoryCodeSource, StdinCodeSource};
