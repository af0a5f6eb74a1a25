//! Boyer-Moore majority vote
//!
//! Finds the majority element (> n/2 occurrences) in O(n) time and O(1)
//! extra space, counting every comparison, element access, candidate
//! reseed, and pass into an [`OpCounter`].

use crate::metrics::counter::OpCounter;

/// Find the majority element of `values`, recording operation counts.
///
/// Phase 1 selects a candidate by pairwise cancellation; phase 2 verifies
/// it against the strict `> n/2` threshold. Phase 2 is a correctness
/// requirement, not reporting: when no majority exists, a non-majority
/// element can still survive phase 1.
///
/// An empty slice returns `None` without touching the counter.
pub fn find_majority<T: PartialEq + Clone>(values: &[T], counter: &mut OpCounter) -> Option<T> {
    if values.is_empty() {
        return None;
    }

    // Phase 1: select a candidate
    counter.record_pass();
    let mut candidate: Option<&T> = None;
    let mut count: usize = 0;

    for value in values {
        counter.record_access();
        if count == 0 {
            // Reseed. The count check is bookkeeping, not an element
            // comparison, so only the allocation is recorded.
            candidate = Some(value);
            count = 1;
            counter.record_allocation();
        } else {
            counter.record_comparison();
            if candidate == Some(value) {
                count += 1;
            } else {
                count -= 1;
            }
        }
    }

    // Non-empty input always reseeds at least once
    let candidate = candidate?;

    // Phase 2: verify the candidate
    counter.record_pass();
    let mut occurrences: usize = 0;
    for value in values {
        counter.record_access();
        counter.record_comparison();
        if value == candidate {
            occurrences += 1;
        }
    }

    if occurrences > values.len() / 2 {
        counter.set_majority_found(true);
        Some(candidate.clone())
    } else {
        counter.set_majority_found(false);
        None
    }
}

/// Find the majority element without keeping the operation counts.
///
/// Owns a scratch counter internally; use [`find_majority`] when the
/// counts matter.
#[allow(dead_code)]
pub fn find_majority_untracked<T: PartialEq + Clone>(values: &[T]) -> Option<T> {
    let mut scratch = OpCounter::new();
    find_majority(values, &mut scratch)
}
