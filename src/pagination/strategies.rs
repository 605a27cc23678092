//! Page layout strategy implementations
//!
//! Each strategy handles a specific way of cutting a collection into pages.

use super::types::PageLayout;
use crate::config::PaginatorOptions;
use crate::types::{LayoutKind, RemainderPolicy};
use std::ops::Range;

// ============================================================================
// Sliced Layout
// ============================================================================

/// Slice-on-demand layout
///
/// Page `n` covers items `n * per_page .. (n + 1) * per_page`, cut short at
/// the end of the collection. Leftover items form a smaller final page.
/// A page size of zero yields no pages at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicedLayout {
    /// Collection length
    pub len: usize,
    /// Items per page
    pub per_page: usize,
}

impl SlicedLayout {
    /// Create a new sliced layout
    pub fn new(len: usize, per_page: usize) -> Self {
        Self { len, per_page }
    }
}

impl PageLayout for SlicedLayout {
    fn pages_count(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        self.len.div_ceil(self.per_page)
    }

    fn bounds(&self, position: usize) -> Option<Range<usize>> {
        let start = position.checked_mul(self.per_page)?;
        let end = start.saturating_add(self.per_page).min(self.len);
        if start >= end {
            return None;
        }
        Some(start..end)
    }
}

// ============================================================================
// Bucketed Layout
// ============================================================================

/// Precomputed bucket layout
///
/// Page ranges are computed once at construction. With
/// [`RemainderPolicy::AppendToLast`] there are `len / per_page` pages (at
/// least one) and the leftover items are folded into the final page, which
/// can then hold more than `per_page` items. With
/// [`RemainderPolicy::ExtraPage`] the pages match [`SlicedLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketedLayout {
    buckets: Vec<Range<usize>>,
}

impl BucketedLayout {
    /// Distribute `len` items into buckets of `per_page`
    pub fn new(len: usize, per_page: usize, remainder: RemainderPolicy) -> Self {
        if per_page == 0 || len == 0 {
            return Self {
                buckets: Vec::new(),
            };
        }

        let mut buckets: Vec<Range<usize>> = (0..len)
            .step_by(per_page)
            .map(|start| start..start.saturating_add(per_page).min(len))
            .collect();

        let rest = len % per_page;
        if remainder == RemainderPolicy::AppendToLast && rest != 0 && buckets.len() > 1 {
            // Fold the short tail bucket into the one before it
            if let Some(tail) = buckets.pop() {
                if let Some(last) = buckets.last_mut() {
                    last.end = tail.end;
                }
            }
        }

        Self { buckets }
    }

    /// All page ranges, in order
    pub fn buckets(&self) -> &[Range<usize>] {
        &self.buckets
    }
}

impl PageLayout for BucketedLayout {
    fn pages_count(&self) -> usize {
        self.buckets.len()
    }

    fn bounds(&self, position: usize) -> Option<Range<usize>> {
        self.buckets.get(position).cloned()
    }
}

/// Build the layout strategy selected by `options` for a collection of `len` items
pub fn build_layout(len: usize, options: &PaginatorOptions) -> Box<dyn PageLayout> {
    match options.layout {
        LayoutKind::Sliced => Box::new(SlicedLayout::new(len, options.per_page)),
        LayoutKind::Bucketed { remainder } => {
            Box::new(BucketedLayout::new(len, options.per_page, remainder))
        }
    }
}
