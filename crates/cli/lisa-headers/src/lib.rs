//! Build-time tooling for the LISA constants
//!
//! Generates the C and C++ headers and prints the catalogue.

pub mod config;
pub mod generate;
pub mod list;
pub mod show;

pub use config::Config;
