//! Library surface of the `fibdev` binary, split out for testing.

pub mod app;
pub mod config;
pub mod errors;
