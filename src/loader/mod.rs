//! Definition loader module
//!
//! Parse paginator definitions from YAML or JSON documents.
//!
//! # Overview
//!
//! A document carries the collection and its options side by side:
//!
//! ```yaml
//! pages: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//! perPage: 5
//! zeroBased: false
//! layout: bucketed
//! addRestToLastPage: true
//! circular: true
//! ```
//!
//! Only `pages` is required.

mod parser;
mod types;

pub use parser::{load_definition, load_definition_from_json, load_definition_from_str};
pub use types::{PaginatorDefinition, RawDefinition};
