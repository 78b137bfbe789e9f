//! Levenshtein edit distance.
//!
//! The distance between two strings is the minimum number of
//! single-character insertions, deletions, and substitutions required to
//! transform one into the other. The match filter measures every candidate
//! prefix against the query with this function; it is also exposed so
//! callers can reuse the same metric.
//!
//! Comparison is by Unicode scalar value (`char`). No normalization happens
//! here: case folding, if any, is applied by the caller before the strings
//! reach this function.

use smallvec::SmallVec;

/// Inline capacity for the distance table rows.
///
/// A row is bounded by one side's character count plus one, and the filter
/// only ever passes query-length prefixes, so rows nearly always live on
/// the stack.
const INLINE_ROW_LEN: usize = 32;

/// Compute the Levenshtein edit distance between `a` and `b`.
///
/// # Example
///
/// ```rust
/// use autotext::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("flash", "flash"), 0);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; INLINE_ROW_LEN]> = a.chars().collect();
    let b_chars: SmallVec<[char; INLINE_ROW_LEN]> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    // Either side empty: the distance is the other side's length. Handled
    // up front so the general case never builds a degenerate table.
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Rolling two-row formulation of the (a_len + 1) x (b_len + 1) table:
    // after processing row i, prev[j] holds the distance between the first
    // i characters of `a` and the first j characters of `b`.
    let mut prev: SmallVec<[usize; INLINE_ROW_LEN]> = (0..=b_len).collect();
    let mut curr: SmallVec<[usize; INLINE_ROW_LEN]> = SmallVec::from_elem(0, b_len + 1);

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            if a_chars[i - 1] == b_chars[j - 1] {
                curr[j] = prev[j - 1];
            } else {
                let deletion = prev[j] + 1;
                let insertion = curr[j - 1] + 1;
                let substitution = prev[j - 1] + 1;
                curr[j] = deletion.min(insertion).min(substitution);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}
