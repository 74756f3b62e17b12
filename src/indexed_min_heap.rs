use std::collections::HashMap;
use std::fmt;

use crate::error::{HeapError, InvalidArgument, Result};
use crate::queue::PriorityQueue;
use crate::{Element, Priority};

/// A slot in the heap. `priority` is used to order nodes (smallest = highest priority).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapNode {
    priority: Priority,
    element: Element,
}

/// An indexed min-heap over unique integer elements. The smallest `priority` is at the "top".
///
/// Every element's position in `nodes` is mirrored in `positions`, so an
/// arbitrary element can be found and re-prioritized in O(log n). All
/// position changes go through `swap`, which updates both.
#[derive(Debug, Default)]
pub struct IndexedMinHeap {
    /// The actual heap storage (array-based, root at 0).
    nodes: Vec<HeapNode>,
    /// Maps elements -> index in the `nodes` vector.
    positions: HashMap<Element, usize>,
}

impl IndexedMinHeap {
    /// Creates an empty IndexedMinHeap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    fn left(idx: usize) -> usize {
        2 * idx + 1
    }

    fn right(idx: usize) -> usize {
        2 * idx + 2
    }

    fn parent(idx: usize) -> Option<usize> {
        if idx == 0 {
            None
        } else {
            Some((idx - 1) / 2)
        }
    }

    // Children are present by bounds alone, never by index membership.
    fn has_left(&self, idx: usize) -> bool {
        Self::left(idx) < self.nodes.len()
    }

    fn has_right(&self, idx: usize) -> bool {
        Self::right(idx) < self.nodes.len()
    }

    /// Exchanges two slots and their index entries together.
    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.positions.insert(self.nodes[a].element, a);
        self.positions.insert(self.nodes[b].element, b);
    }

    /// Moves the node at `idx` toward the root. Returns its final position.
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while let Some(parent_idx) = Self::parent(idx) {
            if self.nodes[idx].priority < self.nodes[parent_idx].priority {
                self.swap(idx, parent_idx);
                idx = parent_idx;
            } else {
                break;
            }
        }
        idx
    }

    /// Moves the node at `idx` toward the leaves, preferring the left child on
    /// ties. Returns its final position.
    fn sift_down(&mut self, mut idx: usize) -> usize {
        while self.has_left(idx) {
            let left_child = Self::left(idx);
            let right_child = Self::right(idx);
            let mut smallest = left_child;
            if self.has_right(idx) && self.nodes[right_child].priority < self.nodes[left_child].priority {
                smallest = right_child;
            }
            if self.nodes[smallest].priority < self.nodes[idx].priority {
                self.swap(idx, smallest);
                idx = smallest;
            } else {
                break;
            }
        }
        idx
    }

    // Only one of the two moves has an effect.
    fn fix(&mut self, idx: usize) {
        let idx = self.sift_up(idx);
        self.sift_down(idx);
    }

    /// Detaches the node at `idx` by swapping it with the last slot.
    /// The caller re-fixes whatever landed at `idx`.
    fn take_at(&mut self, idx: usize) -> HeapNode {
        let last_idx = self.nodes.len() - 1;
        self.swap(idx, last_idx);
        let node = self.nodes.swap_remove(last_idx);
        self.positions.remove(&node.element);
        node
    }

    fn root(&self) -> Result<&HeapNode> {
        self.nodes.first().ok_or(HeapError::EmptyContainer)
    }

    fn check_priority(priority: Priority) -> Result<()> {
        if priority < 0 {
            return Err(InvalidArgument::NegativePriority(priority).into());
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.nodes.len(), self.positions.len());
        for (idx, node) in self.nodes.iter().enumerate() {
            assert!(node.priority >= 0, "negative priority at {}", idx);
            assert_eq!(self.positions.get(&node.element), Some(&idx), "stale index for {}", node.element);
            if let Some(parent_idx) = Self::parent(idx) {
                assert!(
                    self.nodes[parent_idx].priority <= node.priority,
                    "heap property broken between {} and {}",
                    parent_idx,
                    idx
                );
            }
        }
    }
}

impl PriorityQueue for IndexedMinHeap {
    fn insert(&mut self, priority: Priority, element: Element) -> Result<()> {
        if self.positions.contains_key(&element) {
            return Err(InvalidArgument::DuplicateElement(element).into());
        }
        Self::check_priority(priority)?;

        let idx = self.nodes.len();
        self.nodes.push(HeapNode { priority, element });
        self.positions.insert(element, idx);
        self.sift_up(idx);
        Ok(())
    }

    fn extract_min(&mut self) -> Result<(Priority, Element)> {
        if self.nodes.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        let min_node = self.take_at(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok((min_node.priority, min_node.element))
    }

    fn peek_priority(&self) -> Result<Priority> {
        self.root().map(|node| node.priority)
    }

    fn peek_element(&self) -> Result<Element> {
        self.root().map(|node| node.element)
    }

    fn update_priority(&mut self, new_priority: Priority, element: Element) -> Result<()> {
        let &idx = self
            .positions
            .get(&element)
            .ok_or(InvalidArgument::AbsentElement(element))?;
        Self::check_priority(new_priority)?;

        self.nodes[idx] = HeapNode {
            priority: new_priority,
            element,
        };
        self.fix(idx);
        Ok(())
    }

    fn priority_of(&self, element: Element) -> Result<Priority> {
        self.positions
            .get(&element)
            .map(|&idx| self.nodes[idx].priority)
            .ok_or(HeapError::NotFound(element))
    }

    fn remove(&mut self, element: Element) -> Result<Priority> {
        let &idx = self.positions.get(&element).ok_or(HeapError::NotFound(element))?;
        let removed = self.take_at(idx);
        // If we swapped in a new node at `idx`, it may belong above or below.
        if idx < self.nodes.len() {
            self.fix(idx);
        }
        Ok(removed.priority)
    }

    fn contains(&self, element: Element) -> bool {
        self.positions.contains_key(&element)
    }

    fn clear(&mut self) {
        self.nodes = Vec::new();
        self.positions = HashMap::new();
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Dumps the heap slots in position order, then the index sorted by element.
impl fmt::Display for IndexedMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "heap:")?;
        for (idx, node) in self.nodes.iter().enumerate() {
            writeln!(f, "  [{}] {},{}", idx, node.priority, node.element)?;
        }
        let mut positions: Vec<_> = self.positions.iter().collect();
        positions.sort();
        writeln!(f, "index:")?;
        for (element, idx) in positions {
            writeln!(f, "  {} -> {}", element, idx)?;
        }
        Ok(())
    }
}
