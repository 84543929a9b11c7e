//! Inspiration relevance filtering
//!
//! Heuristic thresholds, not invariants: keep everything scoring at or
//! above the primary band; when that leaves fewer than the minimum, backfill
//! from the secondary band in descending relevance.

use muse_model::InspirationCase;

/// Cases at or above this score are always kept
pub const KEEP_THRESHOLD: u8 = 50;
/// Backfill candidates must score at least this
pub const BACKFILL_THRESHOLD: u8 = 30;
/// Target minimum number of cases shown
pub const MIN_INSPIRATIONS: usize = 3;

/// Apply the relevance filter, preserving fetch order for kept cases
#[must_use]
pub fn filter_inspirations(cases: Vec<InspirationCase>) -> Vec<InspirationCase> {
    let (mut kept, rest): (Vec<_>, Vec<_>) = cases
        .into_iter()
        .partition(|c| c.relevance >= KEEP_THRESHOLD);

    if kept.len() < MIN_INSPIRATIONS {
        let mut backfill: Vec<InspirationCase> = rest
            .into_iter()
            .filter(|c| c.relevance >= BACKFILL_THRESHOLD)
            .collect();
        backfill.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        for case in backfill {
            if kept.len() >= MIN_INSPIRATIONS {
                break;
            }
            kept.push(case);
        }
    }
    kept
}
