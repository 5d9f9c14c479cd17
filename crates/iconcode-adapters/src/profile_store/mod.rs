//! Font profile stores.

pub mod memory;

pub use memory::InMemoryProfileStore;
