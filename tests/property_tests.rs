//! Property-based tests using proptest
//!
//! These generate random operation sequences and inputs, and check the
//! heaps' observable behavior against a plain vector model.

use proptest::prelude::*;

use linked_heap::{MaxHeap, MinHeap, PriorityQueue};

/// Random push/pop sequences against a model vector: the peek must always
/// equal the model minimum and the length must always match.
fn check_against_model(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = MinHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            let popped = heap.remove_min();
            let expected = model.iter().copied().min();
            prop_assert_eq!(popped, expected);
            if let Some(popped) = popped {
                let pos = model.iter().position(|&v| v == popped);
                prop_assert!(pos.is_some());
                model.swap_remove(pos.unwrap());
            }
        } else {
            heap.add(value);
            model.push(value);
        }

        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.min().copied(), model.iter().copied().min());
    }

    Ok(())
}

/// Generic length bookkeeping, direction-agnostic.
fn check_len_tracking<H: PriorityQueue<i32> + Default>(
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = H::default();
    let mut expected = 0usize;

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            heap.remove_top();
            expected -= 1;
        } else {
            heap.add(value);
            expected += 1;
        }
        prop_assert_eq!(heap.len(), expected);
        prop_assert_eq!(heap.is_empty(), expected == 0);
    }

    Ok(())
}

proptest! {
    #[test]
    fn min_heap_matches_model(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        check_against_model(ops)?;
    }

    #[test]
    fn min_heap_len_tracking(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        check_len_tracking::<MinHeap<i32>>(ops)?;
    }

    #[test]
    fn max_heap_len_tracking(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        check_len_tracking::<MaxHeap<i32>>(ops)?;
    }

    #[test]
    fn min_heap_pops_nondecreasing(values in prop::collection::vec(-1000i32..1000, 1..300)) {
        let mut heap = MinHeap::new();
        heap.add_all(values.clone());

        let mut last = i32::MIN;
        let mut popped = 0usize;
        while let Some(value) = heap.remove_min() {
            prop_assert!(value >= last, "popped {} after {}", value, last);
            last = value;
            popped += 1;
        }
        prop_assert_eq!(popped, values.len());
    }

    #[test]
    fn max_heap_pops_nonincreasing(values in prop::collection::vec(-1000i32..1000, 1..300)) {
        let mut heap = MaxHeap::new();
        heap.add_all(values.clone());

        let mut last = i32::MAX;
        let mut popped = 0usize;
        while let Some(value) = heap.remove_max() {
            prop_assert!(value <= last, "popped {} after {}", value, last);
            last = value;
            popped += 1;
        }
        prop_assert_eq!(popped, values.len());
    }

    #[test]
    fn duality(values in prop::collection::vec(-100i32..100, 0..200)) {
        let mut min: MinHeap<i32> = MinHeap::new();
        let mut max: MaxHeap<i32> = MaxHeap::new();
        min.add_all(values.clone());
        max.add_all(values);

        let mut ascending: Vec<i32> = std::iter::from_fn(|| min.remove_min()).collect();
        let descending: Vec<i32> = std::iter::from_fn(|| max.remove_max()).collect();
        ascending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn bulk_equals_incremental(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let bulk = MinHeap::from_vec(values.clone());
        let mut incremental = MinHeap::new();
        incremental.add_all(values.clone());
        prop_assert_eq!(bulk.len(), values.len());

        let from_bulk: Vec<i32> = bulk.into_iter().collect();
        let from_incremental: Vec<i32> = incremental.into_iter().collect();
        prop_assert_eq!(from_bulk, from_incremental);
    }

    #[test]
    fn traversal_is_complete_sorted_and_nonmutating(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let heap = MinHeap::from_vec(values.clone());

        let traversed: Vec<i32> = heap.sorted().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(traversed, expected);

        prop_assert_eq!(heap.len(), values.len());
        prop_assert_eq!(heap.min().copied(), values.iter().copied().min());
    }

    #[test]
    fn render_matches_sorted_order(values in prop::collection::vec(0i32..100, 0..50)) {
        let heap = MinHeap::from_vec(values.clone());

        let mut expected = values;
        expected.sort_unstable();
        let rendered: Vec<String> = expected.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(heap.to_string(), format!("{{{}}}", rendered.join(", ")));
    }
}
