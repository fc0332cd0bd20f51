//! Overlap resolution
//!
//! Candidates are ordered by start offset, then by rule priority, and a
//! single sweep keeps every candidate that does not touch a span already
//! kept. Earliest start wins; a later higher-priority token cannot evict an
//! earlier one. Rejected candidates are never reconsidered.

use super::matcher::Candidate;

/// Keep a disjoint, start-ordered subset of the candidates
pub fn resolve(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    // Stable, and priority is unique per rule, so ties are deterministic
    candidates.sort_by_key(|c| (c.start, c.priority));

    let mut resolved: Vec<Candidate<'_>> = Vec::with_capacity(candidates.len());
    // Every kept span ends at or before this offset
    let mut frontier = 0;

    for candidate in candidates {
        if candidate.is_empty() || candidate.start < frontier {
            continue;
        }
        frontier = candidate.end;
        resolved.push(candidate);
    }

    resolved
}
