//! Fuzz target for list payload normalization.
//!
//! Tests that the normalizer handles arbitrary JSON documents without
//! panicking and always yields an iterable list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex_client::api::{normalize_list_payload, Campaign, Customer};

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let normalized = normalize_list_payload(payload);
    let _ = normalized.list.len();
    let _ = normalized.pagination;

    // Typed decoding is allowed to fail but never to panic
    let _ = normalized.clone().decode::<Customer>();
    let _ = normalized.decode::<Campaign>();
});
