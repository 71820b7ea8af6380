//! CLI module for the smartsheet-cli binary

pub mod commands;
pub mod error;

pub use error::CliError;
