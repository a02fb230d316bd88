//! Shared helpers for ring integration tests
//!
//! This module provides:
//! - A reference model of the ring (drop-oldest FIFO on a `VecDeque`)
//! - An operation enum plus `proptest` strategies for random workloads
//! - Small assertion helpers comparing a ring against the model

#![allow(dead_code)]

use std::collections::VecDeque;

use proptest::prelude::*;
use ringbind::{Mode, RingBuffer};

/// One step of a random workload
#[derive(Debug, Clone)]
pub enum Op {
    Write(i32),
    Read,
    Trim(i32),
    Map(i32),
    Fill(i32),
    Sort,
    Align,
    Clear,
}

/// Weighted towards writes so rings spend time full and wrapped
pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<i32>().prop_map(Op::Write),
        3 => Just(Op::Read),
        1 => (-3i32..3).prop_map(Op::Trim),
        1 => (-5i32..5).prop_map(Op::Map),
        1 => any::<i32>().prop_map(Op::Fill),
        1 => Just(Op::Sort),
        1 => Just(Op::Align),
        1 => Just(Op::Clear),
    ]
}

pub fn arb_ops(max: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..max)
}

/// Reference behaviour: unbounded deque clipped to `usable` elements
pub struct Model {
    items: VecDeque<i32>,
    usable: usize,
}

impl Model {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            usable: capacity - 1,
        }
    }

    pub fn write(&mut self, value: i32) {
        self.items.push_back(value);
        if self.items.len() > self.usable {
            self.items.pop_front();
        }
    }

    pub fn read(&mut self) -> Option<i32> {
        self.items.pop_front()
    }

    pub fn trim(&mut self, below: i32) {
        while matches!(self.items.front(), Some(v) if *v < below) {
            self.items.pop_front();
        }
    }

    pub fn map(&mut self, offset: i32) {
        for v in self.items.iter_mut() {
            *v = v.wrapping_add(offset);
        }
    }

    pub fn fill(&mut self, value: i32) {
        while self.items.len() < self.usable {
            self.items.push_back(value);
        }
    }

    pub fn sort(&mut self) {
        self.items.make_contiguous().sort();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contents(&self) -> Vec<i32> {
        self.items.iter().copied().collect()
    }
}

/// Applies `op` to both the ring and the model
pub fn apply<M: Mode, const N: usize>(ring: &mut RingBuffer<'_, i32, N, M>, model: &mut Model, op: &Op) {
    match *op {
        Op::Write(v) => {
            ring.write(v);
            model.write(v);
        }
        Op::Read => {
            let expected = model.read();
            assert_eq!(ring.try_read().ok(), expected);
        }
        Op::Trim(below) => {
            ring.trim(|v| *v < below);
            model.trim(below);
        }
        Op::Map(offset) => {
            ring.map(|v| v.wrapping_add(offset));
            model.map(offset);
        }
        Op::Fill(v) => {
            ring.fill(v);
            model.fill(v);
        }
        Op::Sort => {
            ring.sort();
            model.sort();
        }
        Op::Align => {
            ring.align();
        }
        Op::Clear => {
            ring.clear();
            model.clear();
        }
    }
}

/// Elements of the ring, oldest first
pub fn contents<M: Mode, const N: usize>(ring: &RingBuffer<'_, i32, N, M>) -> Vec<i32> {
    let mut out = Vec::with_capacity(ring.len());
    ring.each(|v| out.push(*v));
    out
}

/// Checks the occupancy invariants that must hold after any operation
pub fn assert_occupancy<M: Mode, const N: usize>(ring: &RingBuffer<'_, i32, N, M>) {
    let len = ring.len();
    assert!(len <= N - 1, "len {} exceeds usable capacity {}", len, N - 1);
    assert_eq!(ring.is_empty(), len == 0);
    assert_eq!(ring.is_full(), len == N - 1);
    assert_eq!(ring.free(), N - 1 - len);
    assert!(ring.in_bounds(ring.cursors().read));
    assert!(ring.in_bounds(ring.cursors().write));
}
