//! Cross-process determinism of search digests.
//!
//! Spawns `search_fixture` under several environment variants and
//! asserts identical stdout. Digests must not depend on cwd, locale, or
//! unrelated environment variables.

use std::path::{Path, PathBuf};
use std::process::Command;

use bisect_kernel::proof::hash::ContentHash;
use bisect_kernel::proof::trace_hash::first_divergence;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// `search_fixture` sits next to the test binary's `deps/` directory.
fn binary_path() -> PathBuf {
    let mut path = std::env::current_exe().expect("test binary path");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push(format!("search_fixture{}", std::env::consts::EXE_SUFFIX));
    path
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, value) in env_overrides {
        command.env(key, value);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {} (cwd={}, overrides={env_overrides:?}): {e}",
            bin.display(),
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

#[test]
fn output_is_identical_across_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("sorted.trace_digest=sha256:"));
    assert!(baseline.contains("sorted.result=3"));
    assert!(baseline.contains("absent.result=none"));
    assert!(baseline.contains("below.result=none"));
    assert!(baseline.contains("empty.step_chain=\n"));

    let tmp = std::env::temp_dir();
    assert_eq!(baseline, run_variant(&tmp, &[]), "cwd changed output");
    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "locale changed output"
    );
    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("BISECT_MAX_LEN", "3"),
                ("RUST_LOG", "trace"),
                ("TZ", "America/New_York"),
            ]
        ),
        "unrelated env vars changed output"
    );
}

#[test]
fn fixture_lines_match_in_process_digests() {
    use bisect_search::normalize::normalize_request;
    use bisect_search::policy::NormalizePolicyV1;
    use bisect_search::report::{run_search, SearchRequestV1};

    let output = run_variant(&workspace_root(), &[]);
    let lines: Vec<&str> = output.lines().collect();
    let requests = lock_tests::fixture_requests();
    assert_eq!(lines.len(), requests.len() * 6);

    for (name, body) in requests {
        let request: SearchRequestV1 = serde_json::from_value(body).unwrap();
        let input = normalize_request(&request, &NormalizePolicyV1::default()).unwrap();
        let report = run_search(&input);
        let expected = format!("{name}.report_digest={}", report.digest().unwrap());
        assert!(lines.contains(&expected.as_str()), "missing {expected}");
    }
}

fn fixture_value<'a>(output: &'a str, key: &str) -> &'a str {
    let prefix = format!("{key}=");
    output
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .unwrap_or_else(|| panic!("no {key} line in fixture output"))
}

fn parse_chain(value: &str) -> Vec<ContentHash> {
    value
        .split(',')
        .filter(|link| !link.is_empty())
        .map(|link| ContentHash::parse(link).unwrap_or_else(|| panic!("bad chain link {link:?}")))
        .collect()
}

#[test]
fn printed_step_chains_match_in_process_chains() {
    use bisect_search::normalize::normalize_request;
    use bisect_search::policy::NormalizePolicyV1;
    use bisect_search::report::{run_search, SearchRequestV1};

    let output = run_variant(&workspace_root(), &[]);
    for (name, body) in lock_tests::fixture_requests() {
        let request: SearchRequestV1 = serde_json::from_value(body).unwrap();
        let input = normalize_request(&request, &NormalizePolicyV1::default()).unwrap();
        let report = run_search(&input);

        let printed = parse_chain(fixture_value(&output, &format!("{name}.step_chain")));
        assert!(printed.iter().all(|link| link.algorithm() == "sha256"));
        assert_eq!(printed.len(), report.steps.len(), "{name}");
        assert_eq!(
            first_divergence(&printed, &report.step_chain().unwrap()),
            None,
            "{name} chain diverged"
        );
    }
}

#[test]
fn printed_step_chains_localize_divergence() {
    let output = run_variant(&workspace_root(), &[]);
    let sorted = parse_chain(fixture_value(&output, "sorted.step_chain"));
    let unsorted = parse_chain(fixture_value(&output, "unsorted.step_chain"));
    let empty = parse_chain(fixture_value(&output, "empty.step_chain"));

    // [3, 4, 5, 6, 7] and [1, 2, 3, 4, 6] already differ at the first mid.
    assert_eq!(first_divergence(&sorted, &unsorted), Some(0));
    assert_eq!(first_divergence(&empty, &sorted), Some(0));
    assert_eq!(first_divergence(&sorted, &sorted), None);
}
