//! Pathcharge CLI library.
//!
//! This crate provides the command-line interface utilities for the
//! pathcharge binary: configuration resolution, terminal styling and output
//! formatting.

pub mod config;
pub mod output;
pub mod terminal;
