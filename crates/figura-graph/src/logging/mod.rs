//! Logging setup.
//!
//! The graph only talks to the `log` facade. This module installs the
//! `env_logger` backend for binaries that want to see the trace output.

mod init;

pub use init::{init_logging, LoggingConfig, FILTER_ENV};
