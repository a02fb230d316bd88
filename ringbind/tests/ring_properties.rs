//! Property tests for ring invariants
//!
//! Random operation sequences are replayed against a ring and a reference
//! model; after every step the ring must agree with the model and keep its
//! occupancy invariants. Covers several capacities, including the two-slot
//! minimum where every write after the first overflows.

mod common;

use proptest::prelude::*;
use ringbind::{Cursors, Ring};

use common::{apply, arb_ops, assert_occupancy, contents, Model};

fn replay<const N: usize>(ops: &[common::Op]) {
    let mut storage = [0i32; N];
    let mut ring = Ring::bind(&mut storage);
    let mut model = Model::new(N);

    for op in ops {
        apply(&mut ring, &mut model, op);
        assert_occupancy(&ring);
        assert_eq!(contents(&ring), model.contents(), "after {:?}", op);
    }
}

proptest! {
    #[test]
    fn matches_model_two_slots(ops in arb_ops(64)) {
        replay::<2>(&ops);
    }

    #[test]
    fn matches_model_four_slots(ops in arb_ops(96)) {
        replay::<4>(&ops);
    }

    #[test]
    fn matches_model_seven_slots(ops in arb_ops(128)) {
        replay::<7>(&ops);
    }

    #[test]
    fn matches_model_sixteen_slots(ops in arb_ops(160)) {
        replay::<16>(&ops);
    }

    #[test]
    fn write_then_read_on_empty(value in any::<i32>(), skew in 0usize..8) {
        let mut storage = [0i32; 8];
        let mut ring = Ring::bind(&mut storage);
        for _ in 0..skew {
            ring.write(0);
            ring.read();
        }
        prop_assert!(ring.is_empty());

        ring.write(value);
        prop_assert_eq!(ring.read(), value);
        prop_assert!(ring.is_empty());
    }

    #[test]
    fn overflow_drops_exactly_the_oldest(values in proptest::collection::vec(any::<i32>(), 5..40)) {
        let mut storage = [0i32; 5];
        let mut ring = Ring::bind(&mut storage);
        for v in &values[..4] {
            ring.write(*v);
        }
        prop_assert!(ring.is_full());

        for (i, v) in values[4..].iter().enumerate() {
            let before = contents(&ring);
            ring.write(*v);
            prop_assert_eq!(ring.len(), 4);

            let mut expected = before[1..].to_vec();
            expected.push(*v);
            prop_assert_eq!(contents(&ring), expected, "write #{}", i);
        }
    }

    #[test]
    fn sort_orders_and_preserves_multiset(
        values in proptest::collection::vec(-20i32..20, 0..12),
        skew in 0usize..12,
    ) {
        let mut storage = [0i32; 12];
        let mut ring = Ring::bind(&mut storage);
        for _ in 0..skew {
            ring.write(0);
            ring.read();
        }
        for v in &values {
            ring.write(*v);
        }
        let mut expected = contents(&ring);
        expected.sort();

        ring.sort();
        prop_assert_eq!(contents(&ring), expected);
    }

    #[test]
    fn align_lays_out_storage_in_logical_order(
        values in proptest::collection::vec(any::<i32>(), 0..10),
        skew in 0usize..10,
    ) {
        let mut storage = [0i32; 10];
        let before;
        let len;
        {
            let mut ring = Ring::bind(&mut storage);
            for _ in 0..skew {
                ring.write(0);
                ring.read();
            }
            for v in &values {
                ring.write(*v);
            }
            before = contents(&ring);
            len = ring.len();

            ring.align();
            prop_assert_eq!(ring.cursors(), Cursors { read: 0, write: len });
            prop_assert_eq!(contents(&ring), before.clone());
        }
        prop_assert_eq!(&storage[..len], before.as_slice());
    }

    #[test]
    fn dup_reads_leave_source_untouched(values in proptest::collection::vec(any::<i32>(), 1..6)) {
        let mut storage = [0i32; 6];
        let mut ring = Ring::bind(&mut storage);
        for v in &values {
            ring.write(*v);
        }
        let cursors = ring.cursors();

        let mut copy = ring.dup();
        while copy.try_read().is_ok() {}

        prop_assert!(copy.is_empty());
        prop_assert_eq!(ring.cursors(), cursors);
        prop_assert_eq!(contents(&ring), values);
    }

    #[test]
    fn extent_twice_is_identity(writes in 0usize..20, reads in 0usize..20) {
        let mut storage = [0i32; 9];
        let mut ring = Ring::bind(&mut storage);
        for i in 0..writes {
            ring.write(i as i32);
        }
        for _ in 0..reads {
            let _ = ring.try_read();
        }

        let twice = ring.extent().extent();
        prop_assert_eq!(twice.cursors(), ring.cursors());
        prop_assert_eq!(contents(&twice), contents(&ring));
    }

    #[test]
    fn clear_always_empties(writes in 0usize..30) {
        let mut storage = [0i32; 6];
        let mut ring = Ring::bind(&mut storage);
        for i in 0..writes {
            ring.write(i as i32);
        }

        ring.clear();
        prop_assert!(ring.is_empty());
        prop_assert_eq!(ring.len(), 0);
        prop_assert_eq!(ring.cursors(), Cursors::ORIGIN);
    }
}
