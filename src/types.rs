//! Common types used throughout paginix
//!
//! Policy enums fixed at construction time, plus the cursor place
//! classification returned by [`Paginator::check_place`](crate::Paginator::check_place).

use std::fmt;

// ============================================================================
// Indexing Base
// ============================================================================

/// Numbering of page indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    /// First page is `0`
    #[default]
    ZeroBased,
    /// First page is `1`
    OneBased,
}

impl IndexBase {
    /// Index of the first page in this base
    pub fn first_index(self) -> usize {
        match self {
            IndexBase::ZeroBased => 0,
            IndexBase::OneBased => 1,
        }
    }

    /// Translate a page index in this base to a zero-based position.
    ///
    /// Returns `None` for `0` under one-based indexing.
    pub fn to_position(self, index: usize) -> Option<usize> {
        index.checked_sub(self.first_index())
    }

    /// Translate a zero-based position to a page index in this base
    pub fn to_index(self, position: usize) -> usize {
        position + self.first_index()
    }

    pub fn is_zero_based(self) -> bool {
        matches!(self, IndexBase::ZeroBased)
    }
}

impl From<bool> for IndexBase {
    fn from(zero_based: bool) -> Self {
        if zero_based {
            IndexBase::ZeroBased
        } else {
            IndexBase::OneBased
        }
    }
}

// ============================================================================
// Remainder Policy
// ============================================================================

/// Where leftover items go when the collection length is not a multiple
/// of the page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// Fold leftovers into the final page (fewer, possibly larger pages)
    #[default]
    AppendToLast,
    /// Leftovers form a new, smaller final page
    ExtraPage,
}

impl From<bool> for RemainderPolicy {
    fn from(add_rest_to_last_page: bool) -> Self {
        if add_rest_to_last_page {
            RemainderPolicy::AppendToLast
        } else {
            RemainderPolicy::ExtraPage
        }
    }
}

// ============================================================================
// Wrap Policy
// ============================================================================

/// Behavior of a single step past the first or last page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Step from the last page to the first (and back)
    #[default]
    Circular,
    /// Stepping past either end is NotFound
    Bounded,
}

impl WrapPolicy {
    pub fn is_circular(self) -> bool {
        matches!(self, WrapPolicy::Circular)
    }
}

impl From<bool> for WrapPolicy {
    fn from(circular: bool) -> Self {
        if circular {
            WrapPolicy::Circular
        } else {
            WrapPolicy::Bounded
        }
    }
}

// ============================================================================
// Layout Kind
// ============================================================================

/// How pages are carved out of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    /// Slice `per_page` items on demand; the last page holds the remainder
    #[default]
    Sliced,
    /// Precompute page buckets once, distributing the remainder by policy
    Bucketed {
        remainder: RemainderPolicy,
    },
}

impl LayoutKind {
    /// Short name used in documents and logs
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Sliced => "sliced",
            LayoutKind::Bucketed { .. } => "bucketed",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Place
// ============================================================================

/// Where the cursor sits relative to the page range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Start,
    Middle,
    End,
}

impl Place {
    pub fn as_str(self) -> &'static str {
        match self {
            Place::Start => "start",
            Place::Middle => "middle",
            Place::End => "end",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
