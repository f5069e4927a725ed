//! Public API for palscan-core
//!
//! Wraps the detection layers behind a single detector type with validated
//! configuration, flexible input and timed output.

mod config;
mod detector;
mod error;
mod input;
mod output;


pub use config::{defaults, Config, ConfigBuilder};
pub use detector::PalindromeDetector;
pub use error::{Error, Result};
pub use input::Input;
pub use output::{DetectionMetadata, Output};
