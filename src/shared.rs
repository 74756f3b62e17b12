use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::indexed_min_heap::IndexedMinHeap;
use crate::queue::PriorityQueue;
use crate::{Element, Priority};

/// A cloneable handle to an [`IndexedMinHeap`] shared between tasks.
///
/// The whole heap sits behind one lock that is held for the duration of each
/// call, so no caller ever sees a half-finished sift.
#[derive(Debug, Clone, Default)]
pub struct SharedHeap {
    heap: Arc<Mutex<IndexedMinHeap>>,
}

impl SharedHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_heap(heap: IndexedMinHeap) -> Self {
        Self {
            heap: Arc::new(Mutex::new(heap)),
        }
    }

    pub async fn insert(&self, priority: Priority, element: Element) -> Result<()> {
        self.heap.lock().await.insert(priority, element)
    }

    pub async fn extract_min(&self) -> Result<(Priority, Element)> {
        self.heap.lock().await.extract_min()
    }

    pub async fn peek_priority(&self) -> Result<Priority> {
        self.heap.lock().await.peek_priority()
    }

    pub async fn peek_element(&self) -> Result<Element> {
        self.heap.lock().await.peek_element()
    }

    pub async fn update_priority(&self, new_priority: Priority, element: Element) -> Result<()> {
        self.heap.lock().await.update_priority(new_priority, element)
    }

    pub async fn priority_of(&self, element: Element) -> Result<Priority> {
        self.heap.lock().await.priority_of(element)
    }

    pub async fn remove(&self, element: Element) -> Result<Priority> {
        self.heap.lock().await.remove(element)
    }

    pub async fn contains(&self, element: Element) -> bool {
        self.heap.lock().await.contains(element)
    }

    pub async fn clear(&self) {
        self.heap.lock().await.clear()
    }

    pub async fn len(&self) -> usize {
        self.heap.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.heap.lock().await.is_empty()
    }

    /// Runs `f` with the lock held, for compound operations that must not
    /// interleave with other callers.
    pub async fn with_lock<R>(&self, f: impl FnOnce(&mut IndexedMinHeap) -> R) -> R {
        let mut heap = self.heap.lock().await;
        f(&mut *heap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_works() {
        let heap = SharedHeap::new();
        heap.insert(5, 1).await.unwrap();
        heap.insert(3, 2).await.unwrap();

        assert_eq!(heap.len().await, 2);
        assert_eq!(heap.peek_element().await, Ok(2));
        heap.update_priority(9, 2).await.unwrap();
        assert_eq!(heap.peek_priority().await, Ok(5));
        assert_eq!(heap.extract_min().await, Ok((5, 1)));
        assert!(heap.contains(2).await);

        heap.clear().await;
        assert!(heap.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_tasks() {
        let heap = SharedHeap::new();

        let mut handles = Vec::new();
        for task in 0..8i64 {
            let heap = heap.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..50i64 {
                    let element = task * 1000 + i;
                    heap.insert((element * 7919) % 101, element).await.unwrap();
                    if i % 5 == 0 {
                        heap.update_priority(0, element).await.unwrap();
                    }
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(heap.len().await, 400);
        heap.with_lock(|heap| heap.assert_invariants()).await;

        let mut last = 0;
        while let Ok((priority, _)) = heap.extract_min().await {
            assert!(priority >= last);
            last = priority;
        }
    }

    #[tokio::test]
    async fn test_with_lock_is_atomic() {
        let heap = SharedHeap::new();
        heap.insert(1, 10).await.unwrap();
        heap.insert(2, 20).await.unwrap();

        let taken = heap
            .with_lock(|heap| -> Result<Priority> {
                let top = heap.peek_element()?;
                heap.remove(top)
            })
            .await;
        assert_eq!(taken, Ok(1));
        assert_eq!(heap.peek_element().await, Ok(20));
    }
}
