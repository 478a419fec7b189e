//! img2ascii library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod loader;
pub mod output;
pub mod pipeline;
