//! Generic ordered list with double-ended access and sorted insertion,
//! plus a lock-guarded wrapper for producer/consumer use.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList<T> {
    items: VecDeque<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Insert after every element that does not order after `item`, so
    /// equal elements keep their insertion order.
    pub fn insert_sorted_by<F>(&mut self, item: T, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let index = self
            .items
            .iter()
            .position(|existing| compare(existing, &item) == Ordering::Greater)
            .unwrap_or(self.items.len());
        self.items.insert(index, item);
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// Remove and return the first element matching `predicate`
    pub fn remove_first<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self.items.iter().position(|item| predicate(item))?;
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

impl<T: Ord> OrderedList<T> {
    pub fn insert_sorted(&mut self, item: T) {
        self.insert_sorted_by(item, T::cmp);
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// An [`OrderedList`] shared between threads behind a mutex.
///
/// Library API for producer/consumer queues: one side pushes at the back,
/// the other pops from the front. The GTK window itself is single-threaded
/// and keeps its faces in a plain [`OrderedList`].
#[derive(Debug)]
pub struct SharedList<T> {
    inner: Arc<Mutex<OrderedList<T>>>,
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(OrderedList::new())),
        }
    }
}

impl<T> SharedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, OrderedList<T>> {
        // A panicking holder cannot leave the deque half-modified
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push_back(&self, item: T) {
        self.lock().push_back(item);
    }

    pub fn pop_front(&self) -> Option<T> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` with the list locked
    pub fn with<R>(&self, f: impl FnOnce(&mut OrderedList<T>) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_ended_access() {
        let mut list = OrderedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_sorted_insert_is_stable() {
        let mut list = OrderedList::new();
        for (key, tag) in [(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd'), (1, 'e')] {
            list.insert_sorted_by((key, tag), |x, y| x.0.cmp(&y.0));
        }
        let tags: String = list.iter().map(|(_, t)| *t).collect();
        assert_eq!(tags, "dbeac");
    }

    #[test]
    fn test_insert_sorted_for_ord() {
        let mut list: OrderedList<i32> = OrderedList::new();
        for v in [5, 3, 9, 1] {
            list.insert_sorted(v);
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_find_and_remove() {
        let mut list: OrderedList<&str> = ["utc", "paris", "tokyo"].into_iter().collect();
        assert_eq!(list.find(|s| s.starts_with('p')), Some(&"paris"));
        assert_eq!(list.remove_first(|s| *s == "paris"), Some("paris"));
        assert_eq!(list.remove_first(|s| *s == "paris"), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_shared_list_across_threads() {
        let list = SharedList::new();
        let producers: Vec<_> = (0..4)
            .map(|n| {
                let list = list.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        list.push_back(n * 100 + i);
                    }
                })
            })
            .collect();
        for handle in producers {
            handle.join().unwrap();
        }
        assert_eq!(list.len(), 100);

        let mut drained = 0;
        while list.pop_front().is_some() {
            drained += 1;
        }
        assert_eq!(drained, 100);
        assert!(list.with(|inner| inner.is_empty()));
    }
}
