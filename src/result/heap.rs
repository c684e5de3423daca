//! Fixed-capacity binary heap keeping the best `limit` items.
//!
//! The heap is ordered by the inverse of the "is better" predicate, so the
//! root is always the worst retained item and can be evicted in O(log n).
//! Storage is allocated once with two spare slots and never grows beyond
//! `limit` items.

use std::cmp::Ordering;

const PADDING: usize = 2;

/// Bounded heap retaining the best `limit` items under `better`.
#[derive(Debug, Clone)]
pub struct BoundedHeap<T, F> {
    items: Vec<T>,
    limit: usize,
    better: F,
}

impl<T, F> BoundedHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap retaining at most `limit` items.
    pub fn new(limit: usize, better: F) -> Self {
        Self {
            items: Vec::with_capacity(limit + PADDING),
            limit,
            better,
        }
    }

    /// Maximum number of retained items.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of retained items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `limit` items are retained.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    /// The worst retained item.
    pub fn worst(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns `true` if `lhs` is strictly better than `rhs`.
    pub fn is_better(&self, lhs: &T, rhs: &T) -> bool {
        (self.better)(lhs, rhs)
    }

    /// Offers `item` to the heap.
    ///
    /// Returns the item that did not make it: `None` if there was room,
    /// the evicted worst item if `item` displaced it, or `item` itself if it
    /// is not strictly better than the current worst.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.limit == 0 {
            return Some(item);
        }
        if self.items.len() < self.limit {
            self.items.push(item);
            self.sift_up(self.items.len() - 1);
            return None;
        }
        if (self.better)(&item, &self.items[0]) {
            Some(self.replace_worst(item))
        } else {
            Some(item)
        }
    }

    /// Overwrites the worst slot with `item` and restores the heap order.
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn replace_worst(&mut self, item: T) -> T {
        assert!(!self.items.is_empty(), "cannot replace worst of empty heap");
        let evicted = std::mem::replace(&mut self.items[0], item);
        self.sift_down(0);
        evicted
    }

    /// Returns the retained items sorted best to worst.
    ///
    /// The internal heap order is left untouched.
    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = self.items.clone();
        items.sort_by(|a, b| {
            if (self.better)(a, b) {
                Ordering::Less
            } else if (self.better)(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        items
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !(self.better)(&self.items[parent], &self.items[idx]) {
                break;
            }
            self.items.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut worst = idx;
            if left < len && (self.better)(&self.items[worst], &self.items[left]) {
                worst = left;
            }
            if right < len && (self.better)(&self.items[worst], &self.items[right]) {
                worst = right;
            }
            if worst == idx {
                break;
            }
            self.items.swap(idx, worst);
            idx = worst;
        }
    }
}
