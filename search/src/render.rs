//! Step and result rendering for the presentation layer.
//!
//! Two observers plug into [`bisect_kernel::engine::search_traced`]:
//! [`LineObserver`] prints human-readable lines to any writer, and
//! [`TracingObserver`] emits one `tracing` event per step.

use std::fmt::Display;
use std::io::{self, Write};

use bisect_kernel::engine::StepObserver;
use bisect_kernel::step::StepV1;

/// `[Step N] Low=l, Mid=m, High=h, Checking=v`
#[must_use]
pub fn render_step<T: Display>(ordinal: usize, step: &StepV1<T>) -> String {
    format!(
        "[Step {ordinal}] Low={}, Mid={}, High={}, Checking={}",
        step.low, step.mid, step.high, step.mid_value
    )
}

/// `[a, b, c]`, each element in its `Display` form.
#[must_use]
pub fn render_sequence<T: Display>(sequence: &[T]) -> String {
    let items: Vec<String> = sequence.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Final line printed after the step trace.
#[must_use]
pub fn render_outcome<T: Display>(target: &T, result: Option<usize>) -> String {
    match result {
        Some(index) => format!("Element {target} found at index {index}"),
        None => format!("Element {target} not found in the array."),
    }
}

/// Summary line: `Result: ...`.
#[must_use]
pub fn render_result<T: Display>(target: &T, result: Option<usize>) -> String {
    match result {
        Some(index) => format!("Result: Element {target} found at index {index}"),
        None => format!("Result: Element {target} not found."),
    }
}

/// Writes [`render_step`] and [`render_outcome`] lines as steps arrive.
///
/// The first I/O error is kept and later writes are skipped; check it with
/// [`LineObserver::finish`].
pub struct LineObserver<'t, T, W> {
    target: &'t T,
    out: W,
    error: Option<io::Error>,
}

impl<'t, T: Display, W: Write> LineObserver<'t, T, W> {
    #[must_use]
    pub fn new(target: &'t T, out: W) -> Self {
        Self {
            target,
            out,
            error: None,
        }
    }

    /// Return the writer, or the first write error.
    ///
    /// # Errors
    ///
    /// The first [`io::Error`] raised while writing.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "{line}") {
                self.error = Some(e);
            }
        }
    }
}

impl<T: Display, W: Write> StepObserver<T> for LineObserver<'_, T, W> {
    fn on_step(&mut self, ordinal: usize, step: &StepV1<T>) {
        self.write_line(&render_step(ordinal, step));
    }

    fn on_finish(&mut self, result: Option<usize>) {
        let line = render_outcome(self.target, result);
        self.write_line(&line);
    }
}

/// Emits each step as a `debug` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<T: Display> StepObserver<T> for TracingObserver {
    fn on_step(&mut self, ordinal: usize, step: &StepV1<T>) {
        tracing::debug!(
            ordinal,
            low = step.low,
            mid = step.mid,
            high = step.high,
            mid_value = %step.mid_value,
            found = step.found,
            "bisection step"
        );
    }

    fn on_finish(&mut self, result: Option<usize>) {
        tracing::debug!(?result, "bisection finished");
    }
}
