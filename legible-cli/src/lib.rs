//! Legible CLI library
//!
//! This library provides the command-line interface and the HTTP service
//! for the Legible text readability analyzer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod server;

pub use error::{CliError, CliResult};
