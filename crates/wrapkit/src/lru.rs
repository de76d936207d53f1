//! LRU (Least Recently Used) map backing `CachePolicy::Lru`
//!
//! Slab of nodes threaded into a doubly-linked recency list, O(1) eviction.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use ahash::RandomState;

/// Node in the recency list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Map with fixed capacity that evicts the least recently used key
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: NonZeroUsize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache holding at most `capacity` entries
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity.get(), RandomState::new()),
            nodes: Vec::with_capacity(capacity.get()),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
        }
    }

    /// Look up `key` and mark it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Check for `key` without touching recency
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Insert `key` as most recently used
    ///
    /// # Returns
    /// * The key that was evicted to make room, if any
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.map.len() >= self.capacity.get() {
            self.evict()
        } else {
            None
        };

        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: self.head,
        });
        self.link_front(idx);
        self.map.insert(key, idx);

        evicted
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);
        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }
        self.link_front(idx);
    }

    /// Make `idx` the head; its `next` must already point at the old head
    fn link_front(&mut self, idx: usize) {
        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn evict(&mut self) -> Option<K> {
        let tail_idx = self.tail?;
        self.unlink(tail_idx);
        let node = self.nodes[tail_idx].take()?;
        self.map.remove(&node.key);
        self.free_list.push(tail_idx);
        Some(node.key)
    }

    fn alloc_node(&mut self) -> usize {
        match self.free_list.pop() {
            Some(idx) => idx,
            None => {
                self.nodes.push(None);
                self.nodes.len() - 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_lru_basic() {
        let mut cache = LruCache::new(cap(2));

        assert_eq!(cache.put(1, "a"), None);
        assert_eq!(cache.put(2, "b"), None);

        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = LruCache::new(cap(2));

        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.put(3, "c"), Some(1));

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.get(&3), Some(&"c"));
    }

    #[test]
    fn test_lru_get_refreshes() {
        let mut cache = LruCache::new(cap(2));

        cache.put(1, "a");
        cache.put(2, "b");
        cache.get(&1);
        assert_eq!(cache.put(3, "c"), Some(2));

        assert!(cache.contains_key(&1));
        assert!(!cache.contains_key(&2));
    }

    #[test]
    fn test_lru_capacity_one() {
        let mut cache = LruCache::new(cap(1));

        cache.put("x", 1);
        assert_eq!(cache.put("y", 2), Some("x"));
        assert_eq!(cache.put("z", 3), Some("y"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"z"), Some(&3));
    }

    #[test]
    fn test_lru_overwrite() {
        let mut cache = LruCache::new(cap(2));

        cache.put(1, "a");
        assert_eq!(cache.put(1, "b"), None);

        assert_eq!(cache.get(&1), Some(&"b"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(cap(3));

        cache.put(1, "a");
        cache.put(2, "b");
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&1), None);
        cache.put(3, "c");
        assert_eq!(cache.get(&3), Some(&"c"));
    }
}
