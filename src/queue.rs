use crate::error::Result;
use crate::{Element, Priority};

/// The operations of a min-priority queue over unique elements.
///
/// Smaller priorities come out first. Failing calls never modify the queue.
pub trait PriorityQueue {
    /// Inserts `element` with `priority`.
    ///
    /// Fails with `InvalidArgument` if the element is already present or the
    /// priority is negative.
    fn insert(&mut self, priority: Priority, element: Element) -> Result<()>;

    /// Removes and returns the `(priority, element)` with the smallest priority.
    fn extract_min(&mut self) -> Result<(Priority, Element)>;

    /// Priority of the minimum entry.
    fn peek_priority(&self) -> Result<Priority>;

    /// Element of the minimum entry.
    fn peek_element(&self) -> Result<Element>;

    /// Changes the priority of an element that is already present.
    ///
    /// Works for both increases and decreases. Fails with `InvalidArgument` if
    /// the element is absent or the priority is negative.
    fn update_priority(&mut self, new_priority: Priority, element: Element) -> Result<()>;

    fn priority_of(&self, element: Element) -> Result<Priority>;

    /// Removes an arbitrary element, returning its priority.
    fn remove(&mut self, element: Element) -> Result<Priority>;

    fn contains(&self, element: Element) -> bool;

    /// Removes everything and releases the storage.
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
