//! Bisect App: the presentation layer.
//!
//! Drives `bisect_search` from an HTTP service ([`http`]), an interactive
//! prompt ([`interactive`]), one-shot CLI runs, and the built-in manual
//! cases ([`cases`]). None of these contain search logic of their own.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cases;
pub mod cli;
pub mod config;
pub mod http;
pub mod interactive;
pub mod logging;
