//! Resolve the current working copy's remote and open it on GitHub.
//!
//! The binary in main.rs is the intended interface; the library exists so
//! the command flows and parsers are testable in isolation.

pub mod commands;
pub mod config;
pub mod console;
pub mod git;
pub mod opener;
pub mod remote;
pub mod url;
pub mod workspace;
