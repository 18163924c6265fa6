//! Frontend components
//!
//! Configuration loading and the shared entry point the program binaries
//! call into.

pub mod cli;
pub mod config;

pub use cli::main as cli_main;
pub use config::Config;
