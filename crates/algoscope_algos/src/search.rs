//! Instrumented binary search.
//!
//! The recorder sorts its own copy of the input ascending before searching;
//! the log's initial values are that sorted array, so replay folds over the
//! array the search actually inspected.

use crate::RunError;
use algoscope_core::{AlgorithmCategory, AlgorithmId};
use algoscope_log::{StepKind, StepLog, StepTarget, TraceRecorder};

/// Binary search for `target`, emitting one Compare per inspected midpoint
///
/// A hit terminates the log with a single Found event. Exhausting the range
/// without a hit is a valid outcome: the log simply carries no Found. Each
/// midpoint that misses also highlights the half it eliminates, which replay
/// accretes into the discarded set.
///
/// # Errors
///
/// Returns error if `values` is empty
pub fn binary_search(values: &[i64], target: i64) -> Result<StepLog, RunError> {
    if values.is_empty() {
        return Err(RunError::EmptyInput {
            algorithm: AlgorithmId::BinarySearch,
        });
    }
    let mut arr = values.to_vec();
    arr.sort_unstable();
    let mut recorder =
        TraceRecorder::new(AlgorithmCategory::Search).with_initial_values(arr.clone());

    let mut lo: isize = 0;
    let mut hi: isize = arr.len() as isize - 1;
    while lo <= hi {
        let mid = ((lo + hi) / 2) as usize;
        recorder.record_full(
            StepKind::Compare,
            vec![mid.into()],
            format!("Inspecting middle element {} at index {}", arr[mid], mid),
            None,
            Some(3),
        );
        match arr[mid].cmp(&target) {
            std::cmp::Ordering::Equal => {
                recorder.record_full(
                    StepKind::Found,
                    vec![mid.into()],
                    format!("Found target {target} at index {mid}"),
                    None,
                    Some(4),
                );
                return Ok(recorder.drain());
            }
            std::cmp::Ordering::Less => {
                recorder.record_full(
                    StepKind::Highlight,
                    (lo as usize..=mid).map(StepTarget::Index).collect(),
                    format!("{} is below target {target}, discarding the left half", arr[mid]),
                    None,
                    Some(5),
                );
                lo = mid as isize + 1;
            }
            std::cmp::Ordering::Greater => {
                recorder.record_full(
                    StepKind::Highlight,
                    (mid..=hi as usize).map(StepTarget::Index).collect(),
                    format!("{} is above target {target}, discarding the right half", arr[mid]),
                    None,
                    Some(6),
                );
                hi = mid as isize - 1;
            }
        }
    }
    Ok(recorder.drain())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found_indices(log: &StepLog) -> Vec<usize> {
        log.events()
            .iter()
            .filter(|e| e.kind == StepKind::Found)
            .flat_map(|e| e.index_targets().collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn test_found_target() {
        let log = binary_search(&[9, 2, 7, 4, 1], 7).unwrap();
        let found = found_indices(&log);
        assert_eq!(found.len(), 1);
        // Sorted array is [1, 2, 4, 7, 9]; 7 sits at index 3.
        assert_eq!(found[0], 3);
        assert_eq!(log.initial_values(), &[1, 2, 4, 7, 9]);
    }

    #[test]
    fn test_absent_target_has_no_found() {
        let log = binary_search(&[9, 2, 7, 4, 1], 5).unwrap();
        assert!(found_indices(&log).is_empty());
        assert!(!log.is_empty());
    }

    #[test]
    fn test_found_terminates_log() {
        let log = binary_search(&[1, 2, 3], 2).unwrap();
        assert_eq!(log.events().last().unwrap().kind, StepKind::Found);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = binary_search(&[], 1).unwrap_err();
        assert_eq!(
            err,
            RunError::EmptyInput {
                algorithm: AlgorithmId::BinarySearch
            }
        );
    }

    #[test]
    fn test_misses_highlight_discarded_half() {
        let log = binary_search(&[1, 2, 3, 4, 5, 6, 7], 6).unwrap();
        // First midpoint is index 3 (value 4 < 6): indices 0..=3 discarded.
        let first_highlight = log
            .events()
            .iter()
            .find(|e| e.kind == StepKind::Highlight)
            .unwrap();
        let discarded: Vec<_> = first_highlight.index_targets().collect();
        assert_eq!(discarded, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_single_element() {
        let hit = binary_search(&[5], 5).unwrap();
        assert_eq!(found_indices(&hit), vec![0]);
        let miss = binary_search(&[5], 6).unwrap();
        assert!(found_indices(&miss).is_empty());
    }
}
