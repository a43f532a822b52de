//! Bisect Search: the boundary between raw input and the kernel.
//!
//! Normalizes untrusted numeric input, runs the kernel's bisection, and
//! packages the trace as a [`report::SearchReportV1`]. It depends only on
//! `bisect_kernel`; presentation (HTTP, CLI) lives in `bisect_app`.
//!
//! # Crate dependency graph
//!
//! ```text
//! bisect_kernel  ←  bisect_search  ←  bisect_app
//! (engine, proof)   (normalize,       (http, cli,
//!                    report, render)   config)
//! ```
//!
//! # Key types
//!
//! - [`normalize::NormalizedInput`] -- sorted sequence + target + `was_sorted`
//! - [`policy::NormalizePolicyV1`] -- input size limit
//! - [`report::SearchRequestV1`] / [`report::SearchReportV1`] -- wire model
//! - [`render::TracingObserver`] -- trace mode via `tracing` events

#![forbid(unsafe_code)]

pub mod error;
pub mod matches;
pub mod normalize;
pub mod policy;
pub mod render;
pub mod report;
