//! Command modules for the phoxt CLI.
//!
//! Each subcommand lives in its own file with an `*Args` struct, a handler,
//! and a `run_*` entry point.

pub mod common;

pub mod check;
pub mod strings;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use strings::{run_strings, StringsArgs};
pub use tokens::{run_tokens, TokensArgs};
