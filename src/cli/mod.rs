//! Command-line front end over the history, conversation and plan views.

pub mod commands;

pub use commands::{Cli, Commands, PlanAction, run};
