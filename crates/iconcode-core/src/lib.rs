//! Iconcode Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for converting icon
//! references (HTML entities, escapes, hex and decimal literals, raw glyphs)
//! into the canonical markup and source-code escapes used by generated UI code.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          iconcode-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (IconCodeConverter, BatchService, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: FontProfileStore, CodeSource) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   iconcode-adapters (Infrastructure)    │
//! │ (InMemoryProfileStore, FileCodeSource)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (CodePoint, IconFormat, IconValidator)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use iconcode_core::application::IconCodeConverter;
//!
//! let converter = IconCodeConverter::default();
//! let result = converter.convert("&#xe5d2;");
//!
//! assert!(result.is_success());
//! assert_eq!(result.markup_escape(), Some("&#xE5D2;"));
//! assert_eq!(result.source_escape(), Some("\\uE5D2"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BatchReport, BatchService, IconCodeConverter, ProfileService,
        convenience::{
            batch_convert, html_entity_to_unicode_char, to_markup_escape, to_source_escape,
            validate,
        },
        ports::{FontProfileStore, IconCodeSource},
    };
    pub use crate::domain::{
        CodePoint, ConversionResult, FontProfile, IconFormat, IconValidator,
        MaterialDesignValidator, ValidationOutcome,
    };
    pub use crate::error::{IconcodeError, IconcodeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
