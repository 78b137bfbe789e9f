//! Autocomplete matching engine for text inputs.
//!
//! This library decides, for a caller-owned candidate list and the current
//! query text, which candidates should be offered as hints and in what
//! order, and resolves a later selection back to its position in the
//! original list.
//!
//! # Architecture
//!
//! The crate is layered, each layer depending only on the previous one:
//!
//! 1. **Edit distance** (`distance` module)
//!    - Levenshtein distance over Unicode scalar values
//!    - Pure function, no state
//!
//! 2. **Match filtering** (`matching` module)
//!    - Compares the query against a same-length prefix of each candidate
//!    - Bounded by a configurable maximum edit distance
//!    - Preserves candidate-list order and caps the result count
//!
//! 3. **Controller** (`controller` module)
//!    - Drives filtering from text-input lifecycle triggers
//!    - Gates on a minimum query length
//!    - Resolves a selected hint row back to its absolute index
//!
//! The candidate list is never mutated or retained; every filtering pass
//! is a pure, synchronous computation whose result replaces the previous
//! one wholesale.
//!
//! # Example
//!
//! ```rust
//! use autotext::{filter_candidates, MatchConfig};
//!
//! let cities = ["Rome", "Rotterdam", "Riga", "Oslo"];
//! let config = MatchConfig::default();
//!
//! let matches = filter_candidates(&cities, "ro", &config);
//! let hints: Vec<_> = matches.iter().map(|m| (m.index, m.value)).collect();
//! assert_eq!(hints, vec![(0, "Rome"), (1, "Rotterdam")]);
//! ```

pub mod controller;
pub mod distance;
pub mod matching;

pub use controller::{AutocompleteConfig, AutocompleteController, AutocompleteEvents, NoEvents};
pub use distance::distance;
pub use matching::{filter_candidates, Match, MatchConfig};
