//! Fuzz target for cross-window message parsing.
//!
//! Tests that arbitrary JSON on the message channel never panics the
//! receiving side, and that accepted messages survive a re-serialize.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex_types::{CompletionMessage, Pagination};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    if let Some(message) = CompletionMessage::from_value(&value) {
        let wire = serde_json::to_value(&message).expect("accepted message must serialize");
        assert_eq!(CompletionMessage::from_value(&wire), Some(message));
    }

    // Pagination descriptors are read leniently from the same payloads
    let _ = serde_json::from_value::<Pagination>(value);
});
