//! Recolor - colorize grayscale images from a color reference.
//!
//! The matching engine lives in the `luma-transfer` crate; this crate adds
//! PNG I/O, the YAML run configuration and the command line pipeline.
//! This library exposes modules for integration testing.

pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
