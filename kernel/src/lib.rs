//! Bisect Kernel: the step-emitting binary search at the core of the workspace.
//!
//! # API Surface
//!
//! - [`engine::search_steps`] -- lazy, finite iterator of [`step::StepV1`] records
//! - [`engine::search`] -- drains `search_steps` into a found index or `None`
//! - [`engine::search_traced`] -- `search` with a per-step [`engine::StepObserver`]
//! - [`proof::trace_hash::trace_digest`] -- content hash of a collected step trace
//!
//! # Module Dependency Direction
//!
//! `numeric` ← `step` ← `engine` ← `proof`
//!
//! One-way only. `search` is defined purely as a consumer of `search_steps`;
//! there is exactly one bisection loop in the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod numeric;
pub mod proof;
pub mod step;
