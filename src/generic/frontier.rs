/*!
A priority queue of cells, ordered by rank.

Cells of lower rank are popped first, and cells of equal rank are popped in the order they were pushed.
A cell is queued at most once, and a cell may be pushed again after it has been popped.

```rust
# use pacard::generic::frontier::Frontier;
# use pacard::structures::cell::Cell;
let mut frontier = Frontier::default();

frontier.push(Cell::new(2, 0));
frontier.push(Cell::new(0, 3));
assert!(!frontier.push(Cell::new(2, 0)));

assert_eq!(frontier.pop(), Some(Cell::new(0, 3)));
assert_eq!(frontier.pop(), Some(Cell::new(2, 0)));
assert_eq!(frontier.pop(), None);
```
*/

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use crate::{
    misc::log::targets::{self},
    structures::cell::{Cell, Rank},
};

#[derive(Debug, Default)]
pub struct Frontier {
    /// Entries of rank, sequence number, and cell, so the least entry is the next cell.
    heap: BinaryHeap<Reverse<(Rank, usize, Cell)>>,

    /// The cells on the heap.
    queued: HashSet<Cell>,

    /// A count of pushes, used to break ties between cells of equal rank.
    sequence: usize,
}

impl Frontier {
    /// Queues `cell`, unless already queued.
    ///
    /// Returns true if the cell was queued.
    pub fn push(&mut self, cell: Cell) -> bool {
        if !self.queued.insert(cell) {
            return false;
        }

        log::trace!(target: targets::FRONTIER, "Queued {cell} at rank {}", cell.rank());
        self.heap.push(Reverse((cell.rank(), self.sequence, cell)));
        self.sequence += 1;
        true
    }

    /// Removes and returns the queued cell of least rank, if any.
    pub fn pop(&mut self) -> Option<Cell> {
        let Reverse((_, _, cell)) = self.heap.pop()?;
        self.queued.remove(&cell);
        Some(cell)
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.queued.contains(cell)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
