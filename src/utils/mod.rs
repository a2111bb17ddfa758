//! Utility functions shared by the CLI.
//!
//! ## Modules
//!
//! - [`app_data`] - Application data directory and config file
//! - [`color`] - Terminal colors (plain output without the `color` feature)
//! - [`samples`] - Seed data for each engine

pub mod app_data;
pub mod color;
pub mod samples;

pub use app_data::*;
pub use samples::*;
