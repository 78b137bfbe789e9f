//! Match filter configuration.

use serde::Deserialize;

/// Parameters controlling one filtering pass.
///
/// The filter keeps no memory between calls; the caller owns the
/// configuration and may replace it at any time. Out-of-range values have
/// defined, total behavior: the unsigned fields cannot go negative, and a
/// zero result cap simply yields an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Compare candidates and query exactly, without lower-casing both
    /// sides first.
    pub case_sensitive: bool,

    /// Maximum edit distance at which a candidate prefix still matches.
    /// Zero means exact prefix matching.
    pub max_distance: usize,

    /// Upper bound on the number of matches returned by one call, keeping
    /// the earliest ones. Zero yields an empty result.
    pub max_results: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_distance: 0,
            max_results: 5,
        }
    }
}
