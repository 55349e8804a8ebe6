//! Command-line interface for the Bazaar engine.

pub mod args;
pub mod commands;
pub mod output;
