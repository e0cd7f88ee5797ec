//! Fuzz target for the popup completion handshake.
//!
//! Runs the full handshake over the in-process bridge with an arbitrary
//! query string, covering query parsing and both delivery policies.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rolodex_client::auth::{deliver_completion, AuthBridge};
use rolodex_client::config::Environment;

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };

    for environment in [Environment::Development, Environment::Production] {
        let (bridge, popup) =
            AuthBridge::open_popup("http://localhost:3000", "http://localhost:5173", query);
        let outcome = deliver_completion(&popup, environment);
        assert_eq!(outcome.delivery.is_delivered(), bridge.try_take().is_some());
    }
});
