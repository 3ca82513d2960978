//! CLI infrastructure for the ttt-minimax solver
//!
//! This module provides argument parsing, run configuration and console
//! output for the `ttt-minimax` binary.

pub mod commands;
pub mod config;
pub mod output;
