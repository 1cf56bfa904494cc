//! Input resolution and validation for the commit action
//!
//! This crate turns the loosely-typed inputs of a workflow step (strings,
//! booleans written as strings, lists written as JSON, YAML or plain text)
//! into a resolved, internally consistent configuration:
//!
//! - **Typed inputs**: [`Inputs`] over an injected [`KeyValueStore`], with
//!   boolean coercion and idempotent defaulting
//! - **List parsing**: [`parse_list`] with JSON → YAML → raw string fallback
//! - **Argument splitting**: [`tokenize`] for free-form git arguments
//! - **Resolution**: [`DefaultResolver`] runs the ordered [`Stage`]s
//! - **Validation**: [`ConfigValidator`] is the single entry point and
//!   returns a [`ResolvedConfig`]
//!
//! # Architecture
//!
//! ```text
//!        host environment (INPUT_*, GITHUB_*)
//!                     |
//!            Inputs / RunnerContext
//!                     |
//!              ConfigValidator
//!                     |
//!              DefaultResolver ---- IdentityLookup
//!               /          \
//!         parse_list     tokenize
//!                     |
//!        ResolvedConfig -> CommitPlan
//! ```
//!
//! # Example
//!
//! ```ignore
//! use commit_core::{ConfigValidator, Inputs, NoLookup, RunnerContext};
//!
//! let context = RunnerContext::from_env();
//! let mut inputs = Inputs::from_env();
//! let validator = ConfigValidator::new(&context, &NoLookup);
//! let (config, report) = validator.validate(&mut inputs).await?;
//! ```

pub mod args;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod identity;
pub mod key;
pub mod list;
pub mod outputs;
pub mod plan;
pub mod refs;
pub mod resolver;
pub mod store;
pub mod validator;

pub use args::tokenize;
pub use config::{DefaultAuthor, GitArg, PathspecErrorHandling, ResolvedConfig};
pub use context::RunnerContext;
pub use diagnostic::{Diagnostic, DiagnosticKind, Level, ResolutionReport};
pub use error::{Error, Result};
pub use identity::{Identity, IdentityLookup, NoLookup, UserInfo};
pub use key::{InputKey, OutputKey, ValueKind};
pub use list::parse_list;
pub use outputs::{MemorySink, OutputSink, Outputs};
pub use plan::{CommitPlan, GitCommand};
pub use resolver::{DefaultResolver, Fact, Stage, StageOutcome};
pub use store::{Inputs, KeyValueStore, MemoryStore};
pub use validator::ConfigValidator;
