//! GitHub Actions adapters for commit-core
//!
//! The core crate only knows about traits; this crate supplies the runner
//! side of each seam:
//!
//! - [`GithubUserLookup`]: the `users/{username}` REST endpoint behind
//!   [`commit_core::IdentityLookup`]
//! - [`GithubOutputFile`] and [`StdoutSink`]: [`commit_core::OutputSink`]
//!   implementations for `$GITHUB_OUTPUT` and local runs
//! - [`logging`]: a tracing subscriber that speaks workflow commands

pub mod error;
pub mod logging;
pub mod lookup;
pub mod output;

pub use error::{Error, Result};
pub use lookup::GithubUserLookup;
pub use output::{GithubOutputFile, StdoutSink};
