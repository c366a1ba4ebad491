use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, VecDeque},
};

use crate::maze::Position;

use super::Path;

/// A pending expansion: the cell to visit and the route that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Ordering key for the priority frontiers. Unused by the stack and the queue.
    pub key: usize,
    pub position: Position,
    /// Route up to, but not including, `position`.
    pub path: Path,
}

impl Record {
    pub fn new(key: usize, position: Position, path: Path) -> Self {
        Record {
            key,
            position,
            path,
        }
    }
}

// Records with equal keys are ordered by position (row, then col) and then by
// comparing their paths element by element, so no two records are ever incomparable.
impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.position.cmp(&other.position))
            .then_with(|| self.path.as_slice().cmp(other.path.as_slice()))
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The extraction discipline of a search.
pub trait Frontier {
    fn push(&mut self, record: Record);
    fn pop(&mut self) -> Option<Record>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
impl Frontier for Vec<Record> {
    fn push(&mut self, record: Record) {
        Vec::push(self, record);
    }

    fn pop(&mut self) -> Option<Record> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// First in, first out.
impl Frontier for VecDeque<Record> {
    fn push(&mut self, record: Record) {
        self.push_back(record);
    }

    fn pop(&mut self) -> Option<Record> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Smallest record first.
// Using Reverse to turn the max-heap into a min-heap
impl Frontier for BinaryHeap<Reverse<Record>> {
    fn push(&mut self, record: Record) {
        BinaryHeap::push(self, Reverse(record));
    }

    fn pop(&mut self) -> Option<Record> {
        BinaryHeap::pop(self).map(|Reverse(record)| record)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}
