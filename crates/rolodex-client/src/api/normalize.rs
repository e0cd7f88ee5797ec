//! # List Payload Normalizer
//!
//! The backend returns list responses in whatever envelope the endpoint
//! happened to grow over time: a bare array, `{"data": [...]}`,
//! `{"items": [...]}`, entity-named keys, or those nested one level under
//! a generic `data` wrapper. Rather than special-casing this at every
//! call site, [`normalize_list_payload`] centralizes one ordered
//! heuristic so views can treat every list endpoint uniformly.
//!
//! The probe order below encodes the observed precedence of backend
//! response variants. It is a heuristic, not a schema: the first match
//! wins even if a later location also holds data, so callers must not
//! rely on payloads with data in several candidate locations
//! disambiguating correctly.

use rolodex_types::Pagination;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::Page;

/// Key paths probed for the list portion of a wrapped payload, in
/// precedence order. A bare top-level array is handled before these.
const LIST_PATHS: [&[&str]; 7] = [
    &["data"],
    &["items"],
    &["customers"],
    &["campaigns"],
    &["data", "customers"],
    &["data", "campaigns"],
    &["data", "data"],
];

/// Key paths probed for the pagination descriptor, in precedence order.
const PAGINATION_PATHS: [&[&str]; 5] = [
    &["pagination"],
    &["data", "pagination"],
    &["customers", "pagination"],
    &["campaigns", "pagination"],
    &["data", "data", "pagination"],
];

/// A list response reduced to a uniform shape.
///
/// `list` is always present (possibly empty) so callers can iterate it
/// unconditionally; `pagination` is `None` only when no recognized
/// location held a pagination object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedList {
    /// The extracted records, still untyped.
    pub list: Vec<Value>,
    /// The extracted pagination descriptor, if any.
    pub pagination: Option<Pagination>,
}

impl NormalizedList {
    /// Decodes the untyped records into `T`, keeping the pagination.
    ///
    /// This is the one schema-aware step and the only place a list
    /// payload can fail: normalization itself never does.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Page<T>, serde_json::Error> {
        let items = self
            .list
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Page {
            items,
            pagination: self.pagination,
        })
    }
}

/// Extracts a uniform `(list, pagination)` pair from a backend list
/// response of any shape.
///
/// Total over all inputs: a null, scalar, or structurally unrecognized
/// payload yields an empty list and no pagination rather than an error.
/// Pure and idempotent - same input, same output, no side effects.
#[must_use]
pub fn normalize_list_payload(payload: Value) -> NormalizedList {
    // A bare sequence is the whole result; such responses carry no
    // envelope for pagination to live in.
    let payload = match payload {
        Value::Array(list) => {
            return NormalizedList {
                list,
                pagination: None,
            }
        }
        other => other,
    };

    let list = LIST_PATHS
        .iter()
        .find_map(|path| lookup(&payload, path).and_then(Value::as_array).cloned())
        .unwrap_or_default();

    let pagination = PAGINATION_PATHS.iter().find_map(|path| {
        lookup(&payload, path)
            .filter(|candidate| candidate.is_object())
            .and_then(|candidate| serde_json::from_value::<Pagination>(candidate.clone()).ok())
    });

    NormalizedList { list, pagination }
}

/// Walks a key path into a JSON value. Returns `None` as soon as a step
/// is missing or the current node is not an object.
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.get(*key))
}
