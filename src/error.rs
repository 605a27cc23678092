//! Error types for paginix
//!
//! This module defines the error hierarchy for the entire crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Navigation never fails through this type: an out-of-range page is a
//! [`Lookup::NotFound`](crate::pagination::Lookup) value. Only construction,
//! document loading and the strict [`try_go`](crate::Paginator::try_go) use it.

use thiserror::Error;

/// The main error type for paginix
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Construction Errors
    // ============================================================================
    #[error("Pages must be a sequence and not empty: {message}")]
    Pages { message: String },

    #[error("Invalid page size: {message}")]
    PerPage { message: String },

    #[error("Zero based must be a boolean: {message}")]
    ZeroBased { message: String },

    #[error("Invalid option '{field}': {message}")]
    InvalidOption { field: String, message: String },

    // ============================================================================
    // Navigation Errors
    // ============================================================================
    #[error("Page {index} not found")]
    PageNotFound { index: usize },

    // ============================================================================
    // Document Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a pages error
    pub fn pages(message: impl Into<String>) -> Self {
        Self::Pages {
            message: message.into(),
        }
    }

    /// Create a page size error
    pub fn per_page(message: impl Into<String>) -> Self {
        Self::PerPage {
            message: message.into(),
        }
    }

    /// Create an indexing base error
    pub fn zero_based(message: impl Into<String>) -> Self {
        Self::ZeroBased {
            message: message.into(),
        }
    }

    /// Create an invalid option error
    pub fn invalid_option(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a page not found error
    pub fn page_not_found(index: usize) -> Self {
        Self::PageNotFound { index }
    }

    /// Stable name of the violated precondition (e.g. `"PagesError"`)
    pub fn name(&self) -> &'static str {
        match self {
            Error::Pages { .. } => "PagesError",
            Error::PerPage { .. } => "PerPageError",
            Error::ZeroBased { .. } => "ZeroBasedError",
            Error::InvalidOption { .. } => "OptionError",
            Error::PageNotFound { .. } => "PageNotFoundError",
            Error::YamlParse(_) | Error::JsonParse(_) => "ParseError",
            Error::Io(_) => "IoError",
        }
    }

    /// Check if this error was raised while validating construction input
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::Pages { .. }
                | Error::PerPage { .. }
                | Error::ZeroBased { .. }
                | Error::InvalidOption { .. }
        )
    }
}

/// Result type alias for paginix
pub type Result<T> = std::result::Result<T, Error>;
