//! # CLI Layer
//!
//! This module is **one possible UI client** for recipebox. It is the only
//! place that parses arguments, writes to stdout/stderr, and picks exit
//! codes. Everything else goes through [`recipebox::api::RecipeApi`].
//!
//! - `setup`: clap definitions and logging setup
//! - `commands`: dispatch and per-command handlers
//! - `print`: terminal output for `CmdResult`s

mod commands;
mod print;
mod setup;

pub use commands::run;
