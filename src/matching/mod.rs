//! Candidate filtering for autocomplete hints.
//!
//! A candidate matches a query when the query is within a bounded edit
//! distance of the candidate's *prefix of the same length*: the filter
//! asks "is the query a fuzzy prefix of this candidate", not "is the query
//! similar to the whole candidate", so short partial input still matches
//! long candidate strings. With a maximum distance of 0 this degenerates
//! to exact prefix matching; with a maximum distance at least the query
//! length every candidate matches, because the trivial edit sequence over
//! the truncated prefix never exceeds the query length.
//!
//! Matches keep the order of the original candidate list and carry their
//! absolute position in it, so a later selection resolves without a
//! secondary lookup table. Results are never re-ranked by distance: ties
//! and ordering are decided purely by candidate-list position.

mod config;
mod filter;


pub use config::MatchConfig;
pub use filter::{filter_candidates, Match};
