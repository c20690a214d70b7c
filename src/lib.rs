// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Visualization helpers for a quantum graph editor.
//!
//! The centerpiece is [`animation::SmoothLayout`], a layout decorator that
//! animates vertices from where they were last drawn toward the positions a
//! delegate [`layout::Layout`] computes, at a rate bounded by elapsed
//! wall-clock time. A render loop ticks it with
//! [`advance`](animation::SmoothLayout::advance) and the paint thread samples
//! [`position`](animation::SmoothLayout::position) whenever it likes.
//!
//! # Key entry points
//!
//! - [`animation::SmoothLayout`] - time-based position animator
//! - [`animation::Relaxer`] - background driver for iterative layouts
//! - [`layout::ForceLayout`], [`layout::StaticLayout`] - delegate layouts
//! - [`options::Options`] - TOML-backed configuration
//! - [`paint`] - vertex fill colors and the page backdrop

pub mod animation;
pub mod error;
pub mod layout;
pub mod options;
pub mod paint;
pub mod util;
