//! Paginator definition types
//!
//! A definition is the complete construction input of a paginator: the
//! collection plus its options, as written in a single document.

use crate::config::{PaginatorOptions, RawOptions};
use crate::error::{Error, Result};
use crate::pagination::Paginator;
use serde::Deserialize;
use serde_json::Value;

/// A validated paginator definition
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatorDefinition {
    /// The collection to paginate, never empty
    pub pages: Vec<Value>,
    /// Validated options
    pub options: PaginatorOptions,
}

impl PaginatorDefinition {
    /// Build a paginator over this definition's pages
    pub fn paginator(&self) -> Result<Paginator<'_, Value>> {
        Paginator::new(&self.pages, self.options)
    }
}

/// A definition as read from a document, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDefinition {
    #[serde(default)]
    pub pages: Option<Value>,
    #[serde(flatten)]
    pub options: RawOptions,
}

impl TryFrom<RawDefinition> for PaginatorDefinition {
    type Error = Error;

    fn try_from(raw: RawDefinition) -> Result<Self> {
        let pages = match raw.pages {
            Some(Value::Array(items)) if items.is_empty() => {
                return Err(Error::pages("got an empty sequence"));
            }
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::pages(format!("expected a sequence, got {other}")));
            }
            None => return Err(Error::pages("no pages given")),
        };

        Ok(Self {
            pages,
            options: PaginatorOptions::try_from(raw.options)?,
        })
    }
}
