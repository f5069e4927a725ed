//! Detection algorithm
//!
//! Three layers, each depending only on the ones listed before it:
//! - [`punctuation`] and [`normalizer`]: separator handling
//! - [`matcher`]: palindrome test and the window scan
//! - [`refiner`]: display cleanup and policy filtering

pub mod matcher;
pub mod normalizer;
pub mod punctuation;
pub mod refiner;

pub use matcher::{is_palindrome, Matcher, ObservedSet};
pub use normalizer::{collapse_and_trim, strip_punctuation};
pub use punctuation::{is_punctuation, PunctuationTable, PUNCTUATION_CHARS};
pub use refiner::{refine_one, RefinedMatch, Refiner};
