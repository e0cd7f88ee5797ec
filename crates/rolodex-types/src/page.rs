//! # Pagination Descriptor
//!
//! The pagination shape list views consume, extracted from whichever
//! location the backend happened to put it in.

use serde::{Deserialize, Deserializer, Serialize};

/// Pagination descriptor attached to a normalized list response.
///
/// The backend attaches pagination objects inconsistently and their shape
/// has drifted over time, so every field is optional and unknown fields
/// are ignored. A `pages` value that is missing or not an unsigned
/// integer reads as `None` rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of pages, when the backend reports one.
    #[serde(default, deserialize_with = "lenient_pages")]
    pub pages: Option<u32>,
}

/// Reads `pages` tolerantly: any non-integer value becomes `None`.
fn lenient_pages<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}
