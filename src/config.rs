//! Paginator configuration
//!
//! [`PaginatorOptions`] is the typed, validated configuration a
//! [`Paginator`](crate::Paginator) is built from. [`RawOptions`] is the same
//! configuration as it arrives from a YAML/JSON document, before any of the
//! values have been type-checked.

use crate::error::{Error, Result};
use crate::types::{IndexBase, LayoutKind, RemainderPolicy, WrapPolicy};
use serde::Deserialize;
use serde_json::Value;

/// Page size used when none is given
pub const DEFAULT_PER_PAGE: usize = 3;

// ============================================================================
// Typed Options
// ============================================================================

/// Policy choices fixed for the lifetime of a paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatorOptions {
    /// Number of items per page
    pub per_page: usize,
    /// Numbering of page indices
    pub index_base: IndexBase,
    /// Page computation strategy
    pub layout: LayoutKind,
    /// Single-step wraparound behavior
    pub wrap: WrapPolicy,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            index_base: IndexBase::default(),
            layout: LayoutKind::default(),
            wrap: WrapPolicy::default(),
        }
    }
}

impl PaginatorOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the indexing base
    #[must_use]
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    #[must_use]
    pub fn zero_based(self) -> Self {
        self.with_index_base(IndexBase::ZeroBased)
    }

    #[must_use]
    pub fn one_based(self) -> Self {
        self.with_index_base(IndexBase::OneBased)
    }

    /// Set the page computation strategy
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    /// Use precomputed pages with the given remainder policy
    #[must_use]
    pub fn bucketed(self, remainder: RemainderPolicy) -> Self {
        self.with_layout(LayoutKind::Bucketed { remainder })
    }

    /// Set the wrap policy
    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapPolicy) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn circular(self) -> Self {
        self.with_wrap(WrapPolicy::Circular)
    }

    #[must_use]
    pub fn bounded(self) -> Self {
        self.with_wrap(WrapPolicy::Bounded)
    }

    /// Check the page size against the active layout.
    ///
    /// Sliced pages accept a page size of zero; precomputed buckets need at
    /// least one item per page.
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 && matches!(self.layout, LayoutKind::Bucketed { .. }) {
            return Err(Error::per_page(
                "the number of items per page must be greater than 0 for bucketed pages",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Raw Options
// ============================================================================

/// Options as written in a document (`perPage`, `zeroBased`, ...).
///
/// Every field is kept as an untyped value so that a wrongly typed option
/// is reported as the precondition it violates rather than as a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    #[serde(default)]
    pub per_page: Option<Value>,
    #[serde(default)]
    pub zero_based: Option<Value>,
    #[serde(default)]
    pub add_rest_to_last_page: Option<Value>,
    #[serde(default)]
    pub layout: Option<Value>,
    #[serde(default)]
    pub circular: Option<Value>,
}

impl TryFrom<RawOptions> for PaginatorOptions {
    type Error = Error;

    fn try_from(raw: RawOptions) -> Result<Self> {
        let per_page = match raw.per_page {
            Some(value) => parse_per_page(&value)?,
            None => DEFAULT_PER_PAGE,
        };

        let index_base = match raw.zero_based {
            Some(Value::Bool(zero_based)) => IndexBase::from(zero_based),
            Some(other) => {
                return Err(Error::zero_based(format!("got {other}")));
            }
            None => IndexBase::default(),
        };

        let remainder = match raw.add_rest_to_last_page {
            Some(value) => RemainderPolicy::from(expect_bool("addRestToLastPage", &value)?),
            None => RemainderPolicy::default(),
        };

        let layout = match raw.layout {
            Some(Value::String(name)) => match name.as_str() {
                "sliced" => LayoutKind::Sliced,
                "bucketed" => LayoutKind::Bucketed { remainder },
                _ => {
                    return Err(Error::invalid_option(
                        "layout",
                        format!("expected \"sliced\" or \"bucketed\", got \"{name}\""),
                    ));
                }
            },
            Some(other) => {
                return Err(Error::invalid_option(
                    "layout",
                    format!("expected a string, got {other}"),
                ));
            }
            None => LayoutKind::default(),
        };

        let wrap = match raw.circular {
            Some(value) => WrapPolicy::from(expect_bool("circular", &value)?),
            None => WrapPolicy::default(),
        };

        let options = PaginatorOptions {
            per_page,
            index_base,
            layout,
            wrap,
        };
        options.validate()?;
        Ok(options)
    }
}

fn parse_per_page(value: &Value) -> Result<usize> {
    let Value::Number(number) = value else {
        return Err(Error::per_page(format!("expected a number, got {value}")));
    };

    if let Some(n) = number.as_u64() {
        return usize::try_from(n)
            .map_err(|_| Error::per_page(format!("{n} does not fit in a page size")));
    }

    let Some(n) = number.as_f64().filter(|n| n.is_finite()) else {
        return Err(Error::per_page(format!("expected a finite number, got {number}")));
    };

    if n < 0.0 {
        return Err(Error::per_page(format!(
            "must be greater or equal than 0, got {number}"
        )));
    }

    // Whole-valued floats such as `3.0` are page sizes too
    if n.fract() != 0.0 || n >= usize::MAX as f64 {
        return Err(Error::per_page(format!("expected a whole number, got {number}")));
    }

    Ok(n as usize)
}

fn expect_bool(field: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::invalid_option(field, format!("expected a boolean, got {value}")))
}
