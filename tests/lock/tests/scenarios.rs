//! End-to-end scenarios through the request pipeline.
//!
//! 1. Sorted input, target present
//! 2. Unsorted input is sorted, result indexes the sorted sequence
//! 3. Duplicates: any matching index is acceptable, `results` lists all
//! 4. Malformed input is rejected before any step is computed

use bisect_search::error::NormalizeError;
use bisect_search::policy::NormalizePolicyV1;
use bisect_search::report::{run_request, run_request_observed, SearchReportV1, SearchRequestV1};
use bisect_kernel::step::StepV1;
use bisect_kernel::numeric::Number;
use serde_json::{json, Value};

fn run(body: Value) -> Result<SearchReportV1, NormalizeError> {
    let request: SearchRequestV1 = serde_json::from_value(body).unwrap();
    run_request(&request, &NormalizePolicyV1::default())
}

#[test]
fn scenario_1_sorted() {
    let report = run(json!({"array": [3, 4, 5, 6, 7], "target": 6})).unwrap();
    assert!(report.sorted);
    assert_eq!(report.result, Some(3));
    let wire = serde_json::to_value(&report).unwrap();
    assert_eq!(
        wire["steps"],
        json!([
            {"low": 0, "mid": 2, "high": 4, "midValue": 5, "found": false},
            {"low": 3, "mid": 3, "high": 4, "midValue": 6, "found": true}
        ])
    );
}

#[test]
fn scenario_2_unsorted() {
    let report = run(json!({"array": [3, 4, 6, 2, 1], "target": 4})).unwrap();
    assert!(!report.sorted);
    assert_eq!(report.result, Some(3));
    assert_eq!(report.results, vec![3]);
    // Steps index into [1, 2, 3, 4, 6].
    let mids: Vec<String> = report.steps.iter().map(|s| s.mid_value.to_string()).collect();
    assert_eq!(mids, ["3", "4"]);
}

#[test]
fn scenario_3_duplicates() {
    let report = run(json!({"array": [1, 2, 2, 2, 3], "target": 2})).unwrap();
    let index = report.result.unwrap();
    assert!([1, 2, 3].contains(&index));
    assert_eq!(report.results, vec![1, 2, 3]);
    assert_eq!(report.steps.last().map(|s| s.mid), Some(index));
}

#[test]
fn scenario_4_malformed_computes_no_steps() {
    let mut steps_seen = 0;
    let request: SearchRequestV1 =
        serde_json::from_value(json!({"array": ["a", "b"], "target": 1})).unwrap();
    let err = run_request_observed(
        &request,
        &NormalizePolicyV1::default(),
        &mut |_: usize, _: &StepV1<Number>| steps_seen += 1,
    )
    .unwrap_err();
    assert!(matches!(err, NormalizeError::InvalidElement { index: 0, .. }));
    assert_eq!(steps_seen, 0);
}

#[test]
fn malformed_target_and_limits() {
    assert!(matches!(
        run(json!({"array": [1, 2], "target": "two"})),
        Err(NormalizeError::InvalidTarget { .. })
    ));
    assert_eq!(
        run(json!({"array": [1, 2]})).unwrap_err(),
        NormalizeError::MissingTarget
    );
    assert!(matches!(
        run(json!({"array": [1, true], "target": 1})),
        Err(NormalizeError::InvalidElement { index: 1, .. })
    ));

    let request: SearchRequestV1 =
        serde_json::from_value(json!({"array": [1, 2, 3], "target": 1})).unwrap();
    assert_eq!(
        run_request(&request, &NormalizePolicyV1::with_max_len(2)).unwrap_err(),
        NormalizeError::TooLong { max: 2, actual: 3 }
    );
}

#[test]
fn absent_and_empty_report_sentinel() {
    for body in [
        json!({"array": [10, 20, 30], "target": 25}),
        json!({"array": [], "target": 25}),
        json!({"target": 25}),
    ] {
        let report = run(body).unwrap();
        assert_eq!(report.result, None);
        assert!(report.results.is_empty());
        assert_eq!(serde_json::to_value(&report).unwrap()["result"], -1);
    }
}

#[test]
fn result_is_always_the_found_step() {
    for (_, body) in lock_tests::fixture_requests() {
        let report = run(body).unwrap();
        let found: Vec<usize> = report.steps.iter().filter(|s| s.found).map(|s| s.mid).collect();
        assert_eq!(report.result, found.first().copied());
        assert!(found.len() <= 1);
    }
}
