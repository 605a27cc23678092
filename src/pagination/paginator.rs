//! The paginator cursor
//!
//! [`Paginator`] borrows a collection, cuts it into pages through a
//! [`PageLayout`] strategy and keeps track of the current page. The cursor
//! only moves through [`next`](Paginator::next),
//! [`previous`](Paginator::previous) and [`go`](Paginator::go); a failed move
//! returns [`Lookup::NotFound`] and leaves the cursor where it was.

use super::strategies::build_layout;
use super::types::{Lookup, PageLayout};
use crate::config::PaginatorOptions;
use crate::error::{Error, Result};
use crate::types::Place;
use tracing::{debug, trace};

/// A stateful cursor over the pages of a borrowed collection
#[derive(Debug)]
pub struct Paginator<'a, T> {
    pages: &'a [T],
    options: PaginatorOptions,
    layout: Box<dyn PageLayout>,
    current: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// Create a paginator positioned on the first page.
    ///
    /// Fails with [`Error::Pages`] for an empty collection and with
    /// [`Error::PerPage`] when the page size does not suit the layout.
    pub fn new(pages: &'a [T], options: PaginatorOptions) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::pages("got an empty sequence"));
        }
        options.validate()?;

        let layout = build_layout(pages.len(), &options);
        debug!(
            items = pages.len(),
            per_page = options.per_page,
            layout = %options.layout,
            pages_count = layout.pages_count(),
            "Created paginator"
        );

        Ok(Self {
            pages,
            options,
            layout,
            current: options.index_base.first_index(),
        })
    }

    /// Create a paginator with default options
    pub fn with_defaults(pages: &'a [T]) -> Result<Self> {
        Self::new(pages, PaginatorOptions::default())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Page at `index` without moving the cursor
    pub fn get(&self, index: usize) -> Lookup<&'a [T]> {
        let pages = self.pages;
        self.options
            .index_base
            .to_position(index)
            .and_then(|position| self.layout.bounds(position))
            .and_then(|range| pages.get(range))
            .into()
    }

    /// Whether `el` is on page `page_number` (the current page when `None`).
    ///
    /// A missing element or a missing page is [`Lookup::NotFound`], so a
    /// `Found(false)` always means the page exists and lacks the element.
    pub fn has(&self, el: Option<&T>, page_number: Option<usize>) -> Lookup<bool>
    where
        T: PartialEq,
    {
        let Some(el) = el else {
            return Lookup::NotFound;
        };
        let index = page_number.unwrap_or(self.current);
        self.get(index).map(|items| items.contains(el))
    }

    /// Classify the cursor as the first page, the last page or neither.
    ///
    /// The first page wins when there is only one page.
    pub fn check_place(&self) -> Place {
        let position = self.current - self.first_page_index();
        if position == 0 {
            Place::Start
        } else if position + 1 == self.pages_count() {
            Place::End
        } else {
            Place::Middle
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move the cursor to `index` and return that page
    pub fn go(&mut self, index: usize) -> Lookup<&'a [T]> {
        let page = self.get(index);
        if page.is_found() {
            self.current = index;
        } else {
            trace!(index, current = self.current, "Page not found");
        }
        page
    }

    /// Like [`go`](Self::go), but a missing page is an [`Error::PageNotFound`]
    pub fn try_go(&mut self, index: usize) -> Result<&'a [T]> {
        self.go(index).ok_or_not_found(index)
    }

    /// Advance the cursor by `count` pages.
    ///
    /// Under [`WrapPolicy::Circular`](crate::WrapPolicy::Circular) a single
    /// step from the last page lands on the first one. Larger steps past the
    /// end are not found, whatever the wrap policy.
    pub fn next(&mut self, count: usize) -> Lookup<&'a [T]> {
        if self.wraps(count, Place::End) {
            debug!(from = self.current, "Wrapping to first page");
            self.current = self.first_page_index();
            return self.current_page();
        }
        match self.current.checked_add(count) {
            Some(index) => self.go(index),
            None => self.step_out_of_range(count),
        }
    }

    /// Move the cursor back by `count` pages.
    ///
    /// Mirror of [`next`](Self::next): a single step from the first page
    /// wraps to the last one under the circular policy.
    pub fn previous(&mut self, count: usize) -> Lookup<&'a [T]> {
        if self.wraps(count, Place::Start) {
            debug!(from = self.current, "Wrapping to last page");
            self.current = self.last_page_index();
            return self.current_page();
        }
        match self.current.checked_sub(count) {
            Some(index) => self.go(index),
            None => self.step_out_of_range(count),
        }
    }

    /// `next(1)`
    pub fn step_forward(&mut self) -> Lookup<&'a [T]> {
        self.next(1)
    }

    /// `previous(1)`
    pub fn step_back(&mut self) -> Lookup<&'a [T]> {
        self.previous(1)
    }

    /// A single circular step from `place`, with at least one page to land on
    fn wraps(&self, count: usize, place: Place) -> bool {
        count == 1
            && self.options.wrap.is_circular()
            && self.pages_count() > 0
            && self.check_place() == place
    }

    fn step_out_of_range(&self, count: usize) -> Lookup<&'a [T]> {
        trace!(count, current = self.current, "Step out of range");
        Lookup::NotFound
    }

    /// Whether a page follows the current one, ignoring wraparound
    pub fn has_next(&self) -> bool {
        self.current
            .checked_add(1)
            .is_some_and(|index| self.get(index).is_found())
    }

    /// Whether a page precedes the current one, ignoring wraparound
    pub fn has_previous(&self) -> bool {
        self.current
            .checked_sub(1)
            .is_some_and(|index| self.get(index).is_found())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The full collection
    pub fn pages(&self) -> &'a [T] {
        self.pages
    }

    pub fn pages_count(&self) -> usize {
        self.layout.pages_count()
    }

    pub fn first_page_index(&self) -> usize {
        self.options.index_base.first_index()
    }

    pub fn first_page(&self) -> Lookup<&'a [T]> {
        self.get(self.first_page_index())
    }

    pub fn last_page_index(&self) -> usize {
        self.options
            .index_base
            .to_index(self.pages_count().saturating_sub(1))
    }

    pub fn last_page(&self) -> Lookup<&'a [T]> {
        self.get(self.last_page_index())
    }

    pub fn current_page_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Lookup<&'a [T]> {
        self.get(self.current)
    }

    pub fn items_per_page(&self) -> usize {
        self.options.per_page
    }

    pub fn is_zero_based(&self) -> bool {
        self.options.index_base.is_zero_based()
    }

    pub fn options(&self) -> &PaginatorOptions {
        &self.options
    }
}
