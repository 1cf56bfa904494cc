//! Command implementations for commit-cli

pub mod outputs;
pub mod resolve;

pub use outputs::run_outputs;
pub use resolve::{run_plan, run_resolve};
