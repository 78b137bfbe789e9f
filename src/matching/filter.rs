//! Core filtering over candidate lists.

use std::borrow::Cow;

use itertools::Itertools;
use tracing::trace;

use crate::distance::distance;

use super::config::MatchConfig;

/// One filtered candidate, paired with its position in the original list.
///
/// `index` is the zero-based position of `value` in the unfiltered
/// candidate list at the time of filtering. It is the identity used to
/// resolve a selection after the hint list has been displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Absolute position in the candidate list.
    pub index: usize,
    /// The original candidate text, never the case-normalized copy.
    pub value: &'a str,
}

/// Filter `candidates` against `query`, returning the matching entries in
/// candidate-list order.
///
/// Each candidate is compared only against its leading `query`-length
/// prefix. Candidates shorter than the query are compared in full, so
/// their distance is at least the length difference. An empty query
/// trivially matches every candidate; gating on a minimum query length is
/// the caller's policy, not enforced here.
///
/// When `config.case_sensitive` is false both sides are lower-cased before
/// comparison; the returned [`Match`] values always borrow the original
/// text. At most `config.max_results` matches are returned.
///
/// # Example
///
/// ```rust
/// use autotext::{filter_candidates, MatchConfig};
///
/// let names = ["Superman", "Sinestro", "Batman"];
/// let matches = filter_candidates(&names, "su", &MatchConfig::default());
///
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].index, 0);
/// assert_eq!(matches[0].value, "Superman");
/// ```
pub fn filter_candidates<'a, S>(
    candidates: &'a [S],
    query: &str,
    config: &MatchConfig,
) -> Vec<Match<'a>>
where
    S: AsRef<str>,
{
    let query_cmp: Cow<'_, str> = if config.case_sensitive {
        Cow::Borrowed(query)
    } else {
        Cow::Owned(query.to_lowercase())
    };
    // The truncation window is measured on the normalized query, so a
    // case mapping that changes the character count stays consistent with
    // the prefix it is compared against.
    let query_len = query_cmp.chars().count();

    let matches: Vec<Match<'a>> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| {
            let candidate = candidate.as_ref();
            let prefix: String = if config.case_sensitive {
                candidate.chars().take(query_len).collect()
            } else {
                candidate.to_lowercase().chars().take(query_len).collect()
            };
            distance(&prefix, &query_cmp) <= config.max_distance
        })
        .map(|(index, candidate)| Match {
            index,
            value: candidate.as_ref(),
        })
        .take(config.max_results)
        .collect();

    trace!(
        target: "autotext::matching::filter_candidates",
        query,
        candidates = candidates.len(),
        matched = %matches.iter().map(|m| m.index).join(","),
    );

    matches
}
