//! Pagination types and traits
//!
//! Defines the lookup outcome and the page layout abstraction used by all
//! strategies.

use crate::error::{Error, Result};
use std::fmt::Debug;
use std::ops::Range;

/// Outcome of a page lookup or navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<P> {
    /// The page (or answer) exists
    Found(P),
    /// No such page; the cursor was left where it was
    NotFound,
}

impl<P> Lookup<P> {
    /// Check if this is a found result
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Check if this is a not found result
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Borrow the found value, if any
    pub fn found(&self) -> Option<&P> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn into_option(self) -> Option<P> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    /// Map the found value
    pub fn map<Q, F: FnOnce(P) -> Q>(self, f: F) -> Lookup<Q> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    /// Turn a missing page into [`Error::PageNotFound`]
    pub fn ok_or_not_found(self, index: usize) -> Result<P> {
        self.into_option()
            .ok_or_else(|| Error::page_not_found(index))
    }
}

impl<P> From<Option<P>> for Lookup<P> {
    fn from(value: Option<P>) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::NotFound,
        }
    }
}

/// Core trait for page computation strategies
///
/// A layout maps a zero-based page position to the item range it covers.
/// Positions are always zero-based here; the paginator translates indices
/// in the configured base before asking.
pub trait PageLayout: Debug + Send + Sync {
    /// Number of pages in the collection
    fn pages_count(&self) -> usize;

    /// Item range of the page at `position`, or `None` when out of range.
    ///
    /// A returned range is never empty.
    fn bounds(&self, position: usize) -> Option<Range<usize>>;
}
