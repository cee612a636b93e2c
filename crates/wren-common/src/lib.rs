//! Common utilities for the Wren parser.
//!
//! This crate provides shared terminal diagnostics used by the parser crates
//! and the command-line front end:
//! - **Warning System** - colored, deduplicated terminal warnings
//! - **Logger** - a `log` backend that writes level-tagged lines to stderr

pub mod logger;
pub mod warning;
