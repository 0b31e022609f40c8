//! Indexed min-priority queue with tie buckets
//!
//! Elements are keyed by identity and ordered by priority. Besides the usual
//! extract-min, the queue supports decrease-key, removal of arbitrary
//! elements and extraction of the whole bucket of elements sharing the
//! minimum priority at once.
//!
//! Two maps are kept in lockstep:
//! - `element_to_priority`: membership and O(1) priority lookup
//! - `priority_to_elements`: ordered buckets; its key set is exactly the set
//!   of distinct priorities currently present
//!
//! Invariant: every element sits in exactly one bucket, the one matching its
//! `element_to_priority` entry, and no bucket is ever empty.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::error::{PathweaveError, Result};

#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T, P> {
    element_to_priority: HashMap<T, P>,
    priority_to_elements: BTreeMap<P, HashSet<T>>,
}

impl<T, P> Default for MinPriorityQueue<T, P> {
    fn default() -> Self {
        Self {
            element_to_priority: HashMap::new(),
            priority_to_elements: BTreeMap::new(),
        }
    }
}

impl<T, P> MinPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Clone + Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.element_to_priority.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_to_priority.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.element_to_priority.contains_key(element)
    }

    /// Lowest priority currently present
    pub fn min_priority(&self) -> Option<&P> {
        self.priority_to_elements.keys().next()
    }

    /// Highest priority currently present
    pub fn max_priority(&self) -> Option<&P> {
        self.priority_to_elements.keys().next_back()
    }

    /// Insert `element`, or move it to `priority` if it is already queued.
    ///
    /// Re-inserting with an unchanged priority is a no-op.
    pub fn insert_or_update(&mut self, element: T, priority: P) {
        if let Some(current) = self.element_to_priority.get(&element) {
            if *current == priority {
                return;
            }
            let current = current.clone();
            self.detach(&element, &current);
        }
        self.priority_to_elements
            .entry(priority.clone())
            .or_default()
            .insert(element.clone());
        self.element_to_priority.insert(element, priority);
    }

    /// Lower the priority of a queued element.
    ///
    /// Returns `Ok(true)` if `priority` was strictly lower than the current
    /// one and the element moved, `Ok(false)` if nothing changed.
    pub fn decrease_priority(&mut self, element: T, priority: P) -> Result<bool> {
        if priority < *self.priority_of(&element)? {
            self.insert_or_update(element, priority);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove `element`; returns whether it was queued.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.element_to_priority.remove(element) {
            Some(priority) => {
                self.detach(element, &priority);
                true
            }
            None => false,
        }
    }

    /// Priority of a queued element; fails with `NotQueued` otherwise.
    pub fn priority_of(&self, element: &T) -> Result<&P> {
        self.element_to_priority
            .get(element)
            .ok_or(PathweaveError::NotQueued)
    }

    pub fn get_priority(&self, element: &T) -> Option<&P> {
        self.element_to_priority.get(element)
    }

    pub fn peek(&self) -> Result<&T> {
        self.peek_or_none().ok_or(PathweaveError::EmptyQueue)
    }

    pub fn peek_or_none(&self) -> Option<&T> {
        self.priority_to_elements
            .values()
            .next()
            .and_then(|bucket| bucket.iter().next())
    }

    pub fn extract_min(&mut self) -> Result<T> {
        self.extract_min_or_none().ok_or(PathweaveError::EmptyQueue)
    }

    pub fn extract_min_or_none(&mut self) -> Option<T> {
        self.extract_min_with_priority_or_none()
            .map(|(element, _)| element)
    }

    pub fn extract_min_with_priority(&mut self) -> Result<(T, P)> {
        self.extract_min_with_priority_or_none()
            .ok_or(PathweaveError::EmptyQueue)
    }

    /// Remove one element of the minimum bucket; which one is unspecified.
    pub fn extract_min_with_priority_or_none(&mut self) -> Option<(T, P)> {
        let mut entry = self.priority_to_elements.first_entry()?;
        let element = entry.get().iter().next().cloned()?;
        entry.get_mut().remove(&element);
        let priority = entry.key().clone();
        if entry.get().is_empty() {
            entry.remove();
        }
        self.element_to_priority.remove(&element);
        Some((element, priority))
    }

    /// Remove and return every element tied for the minimum priority.
    ///
    /// Afterwards the queue minimum is strictly greater, or the queue is empty.
    pub fn extract_all_min(&mut self) -> HashSet<T> {
        self.extract_all_min_with_priority()
            .map(|(_, bucket)| bucket)
            .unwrap_or_default()
    }

    pub fn extract_all_min_with_priority(&mut self) -> Option<(P, HashSet<T>)> {
        let (priority, bucket) = self.priority_to_elements.pop_first()?;
        for element in &bucket {
            self.element_to_priority.remove(element);
        }
        Some((priority, bucket))
    }

    /// Elements in ascending priority order; order within a bucket is unspecified.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            buckets: self.priority_to_elements.values(),
            current: None,
        }
    }

    pub fn iter_with_priorities(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.priority_to_elements
            .iter()
            .flat_map(|(priority, bucket)| bucket.iter().map(move |element| (element, priority)))
    }

    /// Copy of this queue with every entry of `other` inserted or updated.
    pub fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (element, priority) in other.iter_with_priorities() {
            merged.insert_or_update(element.clone(), priority.clone());
        }
        merged
    }

    fn detach(&mut self, element: &T, priority: &P) {
        if let Some(bucket) = self.priority_to_elements.get_mut(priority) {
            bucket.remove(element);
            if bucket.is_empty() {
                self.priority_to_elements.remove(priority);
            }
        }
    }
}

pub struct Iter<'a, T, P> {
    buckets: btree_map::Values<'a, P, HashSet<T>>,
    current: Option<std::collections::hash_set::Iter<'a, T>>,
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.as_mut().and_then(|it| it.next()) {
                return Some(element);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }
}

impl<'a, T, P> IntoIterator for &'a MinPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Clone + Ord,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P> Extend<(T, P)> for MinPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Clone + Ord,
{
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (element, priority) in iter {
            self.insert_or_update(element, priority);
        }
    }
}

impl<T, P> FromIterator<(T, P)> for MinPriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Clone + Ord,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug, P: fmt::Display> fmt::Display for MinPriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (priority, bucket)) in self.priority_to_elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", priority, bucket)?;
        }
        write!(f, "]")
    }
}
