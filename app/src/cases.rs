//! Built-in manual cases, printed as `Array/Target/Result` blocks.

use std::io::{self, Write};

use bisect_kernel::numeric::Number;
use bisect_search::normalize::NormalizedInput;
use bisect_search::render::render_sequence;
use bisect_search::report::run_search;

/// Indices a case accepts as correct. Empty means "not found".
#[derive(Debug, Clone, Copy)]
pub struct ManualCase {
    pub name: &'static str,
    pub array: &'static [i64],
    pub target: i64,
    pub accepted: &'static [usize],
}

pub const MANUAL_CASES: &[ManualCase] = &[
    ManualCase {
        name: "already sorted",
        array: &[3, 4, 5, 6, 7],
        target: 6,
        accepted: &[3],
    },
    ManualCase {
        name: "sorted before searching",
        array: &[3, 4, 6, 2, 1],
        target: 4,
        accepted: &[3],
    },
    ManualCase {
        name: "duplicates",
        array: &[1, 2, 2, 2, 3],
        target: 2,
        accepted: &[1, 2, 3],
    },
    ManualCase {
        name: "absent",
        array: &[10, 20, 30, 40],
        target: 25,
        accepted: &[],
    },
    ManualCase {
        name: "empty",
        array: &[],
        target: 1,
        accepted: &[],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseSummary {
    pub passed: usize,
    pub failed: usize,
}

impl CaseSummary {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl ManualCase {
    fn input(&self) -> NormalizedInput {
        NormalizedInput::new(
            self.array.iter().copied().map(Number::Int).collect(),
            Number::Int(self.target),
        )
    }

    fn accepts(&self, result: Option<usize>) -> bool {
        match result {
            Some(index) => self.accepted.contains(&index),
            None => self.accepted.is_empty(),
        }
    }
}

/// Run every case in `cases`, writing one block per case to `out`.
///
/// # Errors
///
/// Returns any I/O error from writing `out`.
pub fn run_cases<W: Write>(cases: &[ManualCase], mut out: W) -> io::Result<CaseSummary> {
    let mut summary = CaseSummary::default();

    for case in cases {
        let input = case.input();
        let report = run_search(&input);

        writeln!(out, "Case: {}", case.name)?;
        writeln!(out, "Array: {}", render_sequence(&input.sequence))?;
        writeln!(out, "Target: {}", input.target)?;
        match report.result {
            Some(index) => writeln!(out, "Result: {} is found at index {index}.", input.target)?,
            None => writeln!(out, "Result: {} not found.", input.target)?,
        }

        if case.accepts(report.result) {
            summary.passed += 1;
        } else {
            summary.failed += 1;
            tracing::warn!(case = case.name, result = ?report.result, "unexpected result");
            writeln!(out, "UNEXPECTED: accepted {:?}", case.accepted)?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "{} passed, {} failed",
        summary.passed, summary.failed
    )?;
    Ok(summary)
}
