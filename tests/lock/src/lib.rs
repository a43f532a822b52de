//! Shared inputs for the lock tests and the `search_fixture` binary.

use serde_json::{json, Value};

/// Named request bodies exercised by the fixture and the lock tests.
#[must_use]
pub fn fixture_requests() -> Vec<(&'static str, Value)> {
    vec![
        ("sorted", json!({"array": [3, 4, 5, 6, 7], "target": 6})),
        ("unsorted", json!({"array": [3, 4, 6, 2, 1], "target": 4})),
        ("duplicates", json!({"array": [1, 2, 2, 2, 3], "target": 2})),
        ("absent", json!({"array": [10, 20, 30, 40], "target": 25})),
        ("below", json!({"array": [10, 20, 30], "target": 1})),
        ("empty", json!({"array": [], "target": 1})),
        ("mixed", json!({"array": ["2.5", -1, 0.5, 2, 7.25], "target": 2.5})),
    ]
}
