//! Parser for paginator definitions
//!
//! Reads YAML (and therefore JSON) documents and validates them into
//! [`PaginatorDefinition`]s.

use crate::error::Result;
use crate::loader::types::{PaginatorDefinition, RawDefinition};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a paginator definition from a YAML or JSON file
///
/// # Examples
///
/// ```ignore
/// let def = load_definition("./catalog.yaml")?;
/// let mut paginator = def.paginator()?;
/// ```
pub fn load_definition(path: impl AsRef<Path>) -> Result<PaginatorDefinition> {
    let path = path.as_ref();
    debug!("Loading paginator definition from {}", path.display());
    let content = fs::read_to_string(path)?;
    load_definition_from_str(&content)
}

/// Load a paginator definition from a YAML string
pub fn load_definition_from_str(yaml: &str) -> Result<PaginatorDefinition> {
    let raw: RawDefinition = serde_yaml::from_str(yaml)?;
    PaginatorDefinition::try_from(raw)
}

/// Load a paginator definition from a JSON value
pub fn load_definition_from_json(value: Value) -> Result<PaginatorDefinition> {
    let raw: RawDefinition = serde_json::from_value(value)?;
    PaginatorDefinition::try_from(raw)
}
