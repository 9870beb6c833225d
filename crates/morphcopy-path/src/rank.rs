//! Path Similarity Ranker.
//!
//! Scores how close two dotted paths are. Lower is closer; identical paths
//! score 0. The score is the sum of three parts:
//!
//! 1. the flat cost of the two leaf segments,
//! 2. `missing_depth` per depth level one path has over the other,
//! 3. the cheapest alignment of the remaining (non-leaf) segments, found by
//!    deleting the surplus levels from the deeper path.
//!
//! Segment comparison is deliberately flat: equal-length segments cost
//! `letter_mismatch` per differing position, unequal-length segments cost
//! `missing_letter` per character of length difference and are not
//! compared character by character. No edit-distance alignment is done.

use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::path::SEPARATOR;

/// Sentinel returned for malformed input.
pub const MAX_RANK: usize = usize::MAX;

/// Default cost of one differing character between equal-length segments.
pub const LETTER_MISMATCH_WEIGHT: usize = 1;
/// Default cost of one character of length difference between segments.
pub const MISSING_LETTER_WEIGHT: usize = 5;
/// Default cost of one depth level present in only one of the paths.
pub const MISSING_DEPTH_WEIGHT: usize = 3;

/// Tunable scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankWeights {
    pub letter_mismatch: usize,
    pub missing_letter: usize,
    pub missing_depth: usize,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            letter_mismatch: LETTER_MISMATCH_WEIGHT,
            missing_letter: MISSING_LETTER_WEIGHT,
            missing_depth: MISSING_DEPTH_WEIGHT,
        }
    }
}

/// Returns `true` if `path` can be scored.
///
/// A path is unrankable when it is a lone separator, contains whitespace
/// anywhere (including a lone space), or contains two consecutive
/// separators. The empty string is rankable.
pub fn is_rankable(path: &str) -> bool {
    has_forbidden_pattern(path).is_none()
}

pub(crate) fn has_forbidden_pattern(path: &str) -> Option<PathError> {
    let mut sep = [0u8; 4];
    let sep: &str = SEPARATOR.encode_utf8(&mut sep);

    if path == sep {
        return Some(PathError::LoneSeparator);
    }
    if path.chars().any(char::is_whitespace) {
        return Some(PathError::Whitespace {
            path: path.to_string(),
        });
    }
    if path.contains(&format!("{sep}{sep}")) {
        return Some(PathError::ConsecutiveSeparators {
            path: path.to_string(),
        });
    }
    None
}

/// Scores path pairs with a fixed set of weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ranker {
    weights: RankWeights,
}

impl Ranker {
    /// A ranker scoring with `weights`.
    pub fn new(weights: RankWeights) -> Self {
        Self { weights }
    }

    /// The weights this ranker scores with.
    pub fn weights(&self) -> &RankWeights {
        &self.weights
    }

    /// Distance between two dotted paths, or [`MAX_RANK`] if either is unrankable.
    pub fn rank(&self, a: &str, b: &str) -> usize {
        if !is_rankable(a) || !is_rankable(b) {
            return MAX_RANK;
        }

        let mut segments_a: Vec<&str> = a.split(SEPARATOR).collect();
        let mut segments_b: Vec<&str> = b.split(SEPARATOR).collect();
        let leaf_a = segments_a.pop().unwrap_or_default();
        let leaf_b = segments_b.pop().unwrap_or_default();

        let leaf_cost = self.segment_cost(leaf_a, leaf_b);

        let (longer, shorter) = if segments_a.len() >= segments_b.len() {
            (segments_a, segments_b)
        } else {
            (segments_b, segments_a)
        };
        let depth_diff = longer.len() - shorter.len();
        let depth_cost = depth_diff.saturating_mul(self.weights.missing_depth);

        let alignment_cost = if shorter.is_empty() {
            0
        } else {
            self.alignment_cost(&longer, &shorter)
        };

        leaf_cost
            .saturating_add(depth_cost)
            .saturating_add(alignment_cost)
    }

    /// Flat cost between two single segments.
    pub fn segment_cost(&self, a: &str, b: &str) -> usize {
        let len_a = a.chars().count();
        let len_b = b.chars().count();

        if len_a == len_b {
            let mismatches = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
            mismatches.saturating_mul(self.weights.letter_mismatch)
        } else {
            len_a.abs_diff(len_b).saturating_mul(self.weights.missing_letter)
        }
    }

    /// The candidate closest to `path` with its score.
    ///
    /// Unrankable candidates are ignored. Ties resolve to the earliest candidate.
    pub fn closest<'c, I>(&self, path: &str, candidates: I) -> Option<(&'c str, usize)>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let mut best: Option<(&'c str, usize)> = None;
        for candidate in candidates {
            let score = self.rank(path, candidate);
            if score == MAX_RANK {
                continue;
            }
            match best {
                Some((_, current)) if current <= score => {}
                _ => best = Some((candidate, score)),
            }
            if score == 0 {
                break;
            }
        }
        best
    }

    /// Minimum pairwise cost after deleting the surplus segments of `longer`.
    ///
    /// Deletion sets are enumerated in increasing index order, so the search
    /// visits at most C(n, k) leaves for `n = longer.len()` and
    /// `k = longer.len() - shorter.len()`. Exponential in `k`; callers that
    /// need latency bounds must bound path depth.
    fn alignment_cost(&self, longer: &[&str], shorter: &[&str]) -> usize {
        let mut remaining = longer.to_vec();
        let deletions = longer.len() - shorter.len();
        self.search(&mut remaining, shorter, deletions, 0)
    }

    fn search<'s>(
        &self,
        remaining: &mut Vec<&'s str>,
        shorter: &[&str],
        deletions: usize,
        from: usize,
    ) -> usize {
        if deletions == 0 {
            return remaining
                .iter()
                .zip(shorter)
                .map(|(a, b)| self.segment_cost(a, b))
                .fold(0, usize::saturating_add);
        }

        // remaining.len() == shorter.len() + deletions, so the last useful index is shorter.len()
        let last = remaining.len() - deletions;
        let mut best = MAX_RANK;
        for idx in from..=last {
            let removed = remaining.remove(idx);
            let cost = self.search(remaining, shorter, deletions - 1, idx);
            remaining.insert(idx, removed);

            best = best.min(cost);
            if best == 0 {
                break;
            }
        }
        best
    }
}

/// [`Ranker::rank`] with the default weights.
pub fn similarity_rank(a: &str, b: &str) -> usize {
    Ranker::default().rank(a, b)
}
