//! # wordfreq-core
//!
//! Unicode-aware word frequency analysis.
//!
//! Text is split into tokens (maximal runs of Unicode letters and digits,
//! lowercased without regard to locale), tallied into a frequency table, and
//! queried in three ways.
//!
//! ## Features
//!
//! - **Unicode Tokens**: Letters and digits of any script form words; all
//!   punctuation, symbols and whitespace separate them.
//! - **Case Insensitive**: Words are counted in their lowercase form.
//! - **Deterministic Ranking**: Frequency descending, then word ascending by
//!   code point, so equal counts never reorder between runs.
//! - **Total Functions**: Empty or blank input yields 0 or an empty list,
//!   never an error.
//!
//! ## Example
//!
//! ```rust
//! use wordfreq_core::prelude::*;
//!
//! let text = "The quick brown fox jumps over the lazy dog";
//!
//! assert_eq!(highest_frequency(text), 2);
//! assert_eq!(frequency_for_word(text, "Fox"), 1);
//!
//! for entry in top_n_words(text, 3) {
//!     println!("{}: {}", entry.word, entry.frequency);
//! }
//! ```

pub mod analyzer;
pub mod rank;
pub mod table;
pub mod tokenize;

// Re-export commonly used items at the crate root
pub use analyzer::{frequency_for_word, highest_frequency, top_n_words};
pub use rank::{RankedEntry, rank, ranking_order, top_n};
pub use table::{FrequencyTable, tally};
pub use tokenize::tokenize;

/// Prelude module for convenient imports.
///
/// ```
/// use wordfreq_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyzer::{frequency_for_word, highest_frequency, top_n_words};
    pub use crate::rank::{RankedEntry, ranking_order};
    pub use crate::table::FrequencyTable;
    pub use crate::tokenize::tokenize;
}
