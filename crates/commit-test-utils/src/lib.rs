//! Shared test utilities for the commit-action workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git repository fixtures on a named branch
//! - [`env`] — runner environment builder for `INPUT_*` / `GITHUB_*` variables

pub mod env;
pub mod git;
