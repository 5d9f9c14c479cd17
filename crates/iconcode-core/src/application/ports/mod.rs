//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `iconcode-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `FontProfileStore`: Font profile storage/retrieval
//!   - `IconCodeSource`: Where batch input comes from
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{FontProfileStore, IconCodeSource};

#[cfg(test)]
pub use output::{MockFontProfileStore, MockIconCodeSource};
