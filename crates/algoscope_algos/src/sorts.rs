//! Instrumented sorting algorithms.
//!
//! Every sort runs against a private copy of the input and emits a Compare
//! before any conditional Swap/UpdateValue it gates. Merge sort emits
//! UpdateValue placements, never Swap. Each sort closes with one Highlight
//! over the whole array marking the sorted region.
//!
//! Recursion (quick, merge, heap sift-down) is expressed directly on the call
//! stack; inputs are bounded and small.

use algoscope_core::AlgorithmCategory;
use algoscope_log::{StepKind, StepLog, StepTarget, StepValue, TraceRecorder};

fn recorder_for(values: &[i64]) -> TraceRecorder {
    TraceRecorder::new(AlgorithmCategory::Sorting).with_initial_values(values.to_vec())
}

fn finish_sorted(recorder: &mut TraceRecorder, len: usize) {
    if len > 0 {
        recorder.record(
            StepKind::Highlight,
            (0..len).map(StepTarget::Index).collect(),
            "Array fully sorted",
        );
    }
}

/// Bubble sort: adjacent compare-and-swap passes
#[must_use]
pub fn bubble_sort(values: &[i64]) -> StepLog {
    let mut recorder = recorder_for(values);
    let mut arr = values.to_vec();
    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            recorder.record_full(
                StepKind::Compare,
                vec![j.into(), (j + 1).into()],
                format!("Comparing {} and {}", arr[j], arr[j + 1]),
                None,
                Some(2),
            );
            if arr[j] > arr[j + 1] {
                let description = format!("Swapping {} and {}", arr[j], arr[j + 1]);
                arr.swap(j, j + 1);
                recorder.record_full(
                    StepKind::Swap,
                    vec![j.into(), (j + 1).into()],
                    description,
                    None,
                    Some(2),
                );
            }
        }
    }
    finish_sorted(&mut recorder, n);
    recorder.drain()
}

/// Selection sort: repeatedly move the minimum of the unsorted tail forward
#[must_use]
pub fn selection_sort(values: &[i64]) -> StepLog {
    let mut recorder = recorder_for(values);
    let mut arr = values.to_vec();
    let n = arr.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            recorder.record_full(
                StepKind::Compare,
                vec![min.into(), j.into()],
                format!("Comparing {} with {}", arr[min], arr[j]),
                None,
                Some(3),
            );
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if i != min {
            let description = format!("Swapping minimum {} into index {}", arr[min], i);
            arr.swap(i, min);
            recorder.record_full(
                StepKind::Swap,
                vec![i.into(), min.into()],
                description,
                None,
                Some(4),
            );
        }
    }
    finish_sorted(&mut recorder, n);
    recorder.drain()
}

/// Insertion sort: shift-and-insert, one key at a time
#[must_use]
pub fn insertion_sort(values: &[i64]) -> StepLog {
    let mut recorder = recorder_for(values);
    let mut arr = values.to_vec();
    let n = arr.len();
    for i in 1..n {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            recorder.record_full(
                StepKind::Compare,
                vec![(j - 1).into(), j.into()],
                format!("Comparing {} with key {}", arr[j - 1], key),
                None,
                Some(3),
            );
            arr[j] = arr[j - 1];
            recorder.record_full(
                StepKind::UpdateValue,
                vec![j.into()],
                format!("Shifting {} right to index {}", arr[j], j),
                Some(StepValue::Value(arr[j])),
                Some(4),
            );
            j -= 1;
        }
        if j > 0 {
            recorder.record_full(
                StepKind::Compare,
                vec![(j - 1).into(), j.into()],
                format!("Comparing {} with key {}", arr[j - 1], key),
                None,
                Some(3),
            );
        }
        arr[j] = key;
        recorder.record_full(
            StepKind::UpdateValue,
            vec![j.into()],
            format!("Inserting key {key} at index {j}"),
            Some(StepValue::Value(key)),
            Some(6),
        );
    }
    finish_sorted(&mut recorder, n);
    recorder.drain()
}

/// Merge sort: recursive halving, then merge by repeated placement
#[must_use]
pub fn merge_sort(values: &[i64]) -> StepLog {
    let mut recorder = recorder_for(values);
    let mut arr = values.to_vec();
    let n = arr.len();
    if n > 0 {
        sort_range(&mut arr, 0, n - 1, &mut recorder);
    }
    finish_sorted(&mut recorder, n);
    recorder.drain()
}

fn sort_range(arr: &mut [i64], lo: usize, hi: usize, recorder: &mut TraceRecorder) {
    if lo >= hi {
        return;
    }
    let mid = (lo + hi) / 2;
    sort_range(arr, lo, mid, recorder);
    sort_range(arr, mid + 1, hi, recorder);
    merge(arr, lo, mid, hi, recorder);
}

fn merge(arr: &mut [i64], lo: usize, mid: usize, hi: usize, recorder: &mut TraceRecorder) {
    let left = arr[lo..=mid].to_vec();
    let right = arr[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        recorder.record_full(
            StepKind::Compare,
            vec![(lo + i).into(), (mid + 1 + j).into()],
            format!("Comparing {} with {}", left[i], right[j]),
            None,
            Some(5),
        );
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        recorder.record_full(
            StepKind::UpdateValue,
            vec![k.into()],
            format!("Placing {} at index {}", arr[k], k),
            Some(StepValue::Value(arr[k])),
            Some(5),
        );
        k += 1;
    }
    for &value in &left[i..] {
        arr[k] = value;
        recorder.record_full(
            StepKind::UpdateValue,
            vec![k.into()],
            format!("Placing remaining {value} at index {k}"),
            Some(StepValue::Value(value)),
            Some(5),
        );
        k += 1;
    }
    for &value in &right[j..] {
        arr[k] = value;
        recorder.record_full(
            StepKind::UpdateValue,
            vec![k.into()],
            format!("Placing remaining {value} at index {k}"),
            Some(StepValue::Value(value)),
            Some(5),
        );
        k += 1;
    }
}

/// Heap sort: build a max-heap, then repeatedly extract the maximum
#[must_use]
pub fn heap_sort(values: &[i64]) -> StepLog {
    let mut recorder = recorder_for(values);
    let mut arr = values.to_vec();
    let n = arr.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut arr, n, i, &mut recorder);
    }
    for i in (1..n).rev() {
        let description = format!("Extracting max {} to index {}", arr[0], i);
        arr.swap(0, i);
        recorder.record_full(
            StepKind::Swap,
            vec![0.into(), i.into()],
            description,
            None,
            Some(2),
        );
        sift_down(&mut arr, i, 0, &mut recorder);
    }
    finish_sorted(&mut recorder, n);
    recorder.drain()
}

fn sift_down(arr: &mut [i64], n: usize, i: usize, recorder: &mut TraceRecorder) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;
    if left < n {
        recorder.record_full(
            StepKind::Compare,
            vec![largest.into(), left.into()],
            format!("Comparing {} with left child {}", arr[largest], arr[left]),
            None,
            Some(3),
        );
        if arr[left] > arr[largest] {
            largest = left;
        }
    }
    if right < n {
        recorder.record_full(
            StepKind::Compare,
            vec![largest.into(), right.into()],
            format!("Comparing {} with right child {}", arr[largest], arr[right]),
            None,
            Some(3),
        );
        if arr[right] > arr[largest] {
            largest = right;
        }
    }
    if largest != i {
        let description = format!("Sifting {} down past {}", arr[i], arr[largest]);
        arr.swap(i, largest);
        recorder.record_full(
            StepKind::Swap,
            vec![i.into(), largest.into()],
            description,
            None,
            Some(3),
        );
        sift_down(arr, n, largest, recorder);
    }
}

/// Quick sort with last-element pivot
#[must_use]
pub fn quick_sort(values: &[i64]) -> StepLog {
    let mut recorder = recorder_for(values);
    let mut arr = values.to_vec();
    let n = arr.len();
    if n > 1 {
        quick_sort_range(&mut arr, 0, n - 1, &mut recorder);
    }
    finish_sorted(&mut recorder, n);
    recorder.drain()
}

fn quick_sort_range(arr: &mut [i64], lo: usize, hi: usize, recorder: &mut TraceRecorder) {
    if lo >= hi {
        return;
    }
    let p = partition(arr, lo, hi, recorder);
    if p > lo {
        quick_sort_range(arr, lo, p - 1, recorder);
    }
    quick_sort_range(arr, p + 1, hi, recorder);
}

fn partition(arr: &mut [i64], lo: usize, hi: usize, recorder: &mut TraceRecorder) -> usize {
    let pivot = arr[hi];
    recorder.record_full(
        StepKind::MarkPivot,
        vec![hi.into()],
        format!("Picked pivot {pivot}"),
        Some(StepValue::Value(pivot)),
        Some(2),
    );
    let mut boundary = lo;
    for j in lo..hi {
        recorder.record_full(
            StepKind::Compare,
            vec![j.into(), hi.into()],
            format!("Comparing {} with pivot {pivot}", arr[j]),
            None,
            Some(4),
        );
        if arr[j] < pivot {
            let description = format!("Swapping {} and {}", arr[boundary], arr[j]);
            arr.swap(boundary, j);
            recorder.record_full(
                StepKind::Swap,
                vec![boundary.into(), j.into()],
                description,
                None,
                Some(5),
            );
            boundary += 1;
        }
    }
    let description = format!("Moving pivot {pivot} into place at index {boundary}");
    arr.swap(boundary, hi);
    recorder.record_full(
        StepKind::Swap,
        vec![boundary.into(), hi.into()],
        description,
        None,
        Some(6),
    );
    boundary
}
