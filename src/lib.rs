//! # paginix
//!
//! A stateful page cursor over an in-memory collection.
//!
//! ## Features
//!
//! - **Page Layouts**: slice pages on demand, or precompute buckets with a remainder policy
//! - **Indexing Base**: zero-based or one-based page numbers
//! - **Wraparound**: a single step past either end can loop to the other end
//! - **Explicit Outcomes**: out-of-range navigation is a `Lookup::NotFound`, never a magic value
//! - **Document Loading**: build a paginator from a YAML or JSON definition
//!
//! ## Quick Start
//!
//! ```rust
//! use paginix::{Lookup, Paginator, PaginatorOptions, Place};
//!
//! let items: Vec<u32> = (1..=10).collect();
//! let mut paginator = Paginator::new(&items, PaginatorOptions::new().with_per_page(3))?;
//!
//! assert_eq!(paginator.pages_count(), 4);
//! assert_eq!(paginator.get(3), Lookup::Found(&[10][..]));
//! assert_eq!(paginator.get(4), Lookup::NotFound);
//!
//! paginator.go(3);
//! assert_eq!(paginator.check_place(), Place::End);
//!
//! // A single step from the last page wraps around
//! assert_eq!(paginator.next(1), Lookup::Found(&[1, 2, 3][..]));
//! # Ok::<(), paginix::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                       Paginator                       │
//! │  get()  go()  next()  previous()  has()  check_place()│
//! └───────────────────────────────────────────────────────┘
//!                             │
//! ┌─────────────────┬─────────┴─────────┬─────────────────┐
//! │     Options     │      Layout       │     Loader      │
//! ├─────────────────┼───────────────────┼─────────────────┤
//! │ Page size       │ Sliced            │ YAML            │
//! │ Index base      │ Bucketed          │ JSON            │
//! │ Wrap policy     │                   │ File            │
//! └─────────────────┴───────────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Policy enums and cursor place
pub mod types;

/// Paginator options and validation
pub mod config;

/// Page layouts and the paginator cursor
pub mod pagination;

/// YAML/JSON loader for paginator definitions
pub mod loader;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{PaginatorOptions, RawOptions};
pub use error::{Error, Result};
pub use pagination::{Lookup, PageLayout, Paginator};
pub use types::*;

pub use loader::{load_definition, load_definition_from_str, PaginatorDefinition};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
