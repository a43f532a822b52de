//! Prompt-driven demo: read a sequence and a target, print every step.

use std::io::{self, BufRead, Write};

use bisect_kernel::engine::search_traced;
use bisect_search::error::NormalizeError;
use bisect_search::normalize::{is_ascending, parse_sequence, parse_target, NormalizedInput};
use bisect_search::policy::NormalizePolicyV1;
use bisect_search::render::{render_result, render_sequence, LineObserver};

pub const HEADER: &str = "=== Binary Search Algorithm Demo ===";
pub const ARRAY_PROMPT: &str = "Enter sorted numbers separated by space: ";
pub const TARGET_PROMPT: &str = "Enter the element to search for: ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter numeric values only.";
pub const SORTING_NOTICE: &str = "The array is not sorted. Sorting automatically...";

/// How a demo session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoOutcome {
    Found(usize),
    NotFound,
    /// Input was rejected; no search ran.
    InvalidInput(NormalizeError),
}

/// Run one demo session over `input`, writing prompts and the trace to `out`.
///
/// End of input reads as a blank line.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `out`.
pub fn run_interactive<R, W>(
    mut input: R,
    mut out: W,
    policy: &NormalizePolicyV1,
) -> io::Result<DemoOutcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "{HEADER}")?;

    let array_line = prompt(&mut input, &mut out, ARRAY_PROMPT)?;
    let sequence = match parse_sequence(&array_line, policy) {
        Ok(sequence) => sequence,
        Err(e) => return reject(&mut out, e),
    };
    if !is_ascending(&sequence) {
        writeln!(out, "{SORTING_NOTICE}")?;
    }

    let target_line = prompt(&mut input, &mut out, TARGET_PROMPT)?;
    let target = match parse_target(&target_line) {
        Ok(target) => target,
        Err(e) => return reject(&mut out, e),
    };

    let normalized = NormalizedInput::new(sequence, target);
    let NormalizedInput {
        sequence, target, ..
    } = &normalized;
    tracing::debug!(len = sequence.len(), sorted = normalized.was_sorted, "demo input");

    writeln!(out)?;
    writeln!(
        out,
        "Searching for {target} in {}",
        render_sequence(sequence)
    )?;

    let mut observer = LineObserver::new(target, &mut out);
    let result = search_traced(sequence, target, &mut observer);
    observer.finish()?;

    writeln!(out)?;
    writeln!(out, "{}", render_result(target, result))?;

    Ok(result.map_or(DemoOutcome::NotFound, DemoOutcome::Found))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn reject<W: Write>(out: &mut W, error: NormalizeError) -> io::Result<DemoOutcome> {
    tracing::debug!(%error, "demo input rejected");
    writeln!(out, "{INVALID_INPUT}")?;
    Ok(DemoOutcome::InvalidInput(error))
}
