//! Pagination module
//!
//! Supports: Sliced (on demand), Bucketed (precomputed)
//!
//! # Overview
//!
//! The pagination module provides a cursor over an in-memory collection.
//! A [`PageLayout`] strategy decides which items make up each page, and the
//! [`Paginator`] tracks the current page and moves it around.

mod paginator;
mod strategies;
mod types;

pub use paginator::Paginator;
pub use strategies::{build_layout, BucketedLayout, SlicedLayout};
pub use types::{Lookup, PageLayout};
