//! ceprace CLI. Races a postal-code lookup across the configured providers
//! and prints the first answer.

pub use cmd::Cli;

pub mod cmd;
pub mod config;
pub mod output;
