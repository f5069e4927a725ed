//! Palindrome detection over free text
//!
//! The detector slides a bounded window across the input one character at a
//! time and reports, for each start position, the longest prefix whose
//! punctuation-stripped form reads the same in both directions. Raw hits are
//! then trimmed, collapsed and filtered into readable results.
//!
//! # Architecture
//!
//! - **Domain layer**: separator table, normalization, window scan, refinement
//! - **API layer**: validated configuration, input resolution, timed output
//!
//! Scan cost grows with `text length × max_window²`; very long inputs are
//! slow but never fail.
//!
//! # Example
//!
//! ```rust
//! use palscan_core::{Config, PalindromeDetector};
//!
//! let config = Config::builder().min_length(3).build().unwrap();
//! let detector = PalindromeDetector::new(config).unwrap();
//!
//! let found = detector.find_all("Noon came; we saw a kayak.");
//! assert!(found.contains(&"noon".to_string()));
//! assert!(found.contains(&"kayak".to_string()));
//! ```

pub mod api;
pub mod domain;

pub use api::{
    defaults, Config, ConfigBuilder, DetectionMetadata, Error, Input, Output, PalindromeDetector,
    Result,
};
pub use domain::{
    collapse_and_trim, is_palindrome, is_punctuation, strip_punctuation, Matcher, ObservedSet,
    RefinedMatch, Refiner,
};
