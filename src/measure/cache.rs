/**
 * File: /src/measure/cache.rs
 * Created Date: Friday, March 6th 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 17th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-06		Zihan	Significance cache keyed by attribute subset
 * 2026-03-17		Zihan	Explicit invalidation after arrivals
 */

use std::collections::HashMap;

use crate::table::Attribute;

/// Significance values keyed by attribute subset, owned by one search run.
///
/// Keys are order-insensitive. The cache knows nothing about the data the
/// values were computed from, so callers must `invalidate` it whenever the
/// universe changes.
#[derive(Debug, Clone)]
pub struct SigCache<V> {
    values: HashMap<Vec<Attribute>, V>,
    hits: usize,
    misses: usize,
}

impl<V: Copy> Default for SigCache<V> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<V: Copy> SigCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(attributes: &[Attribute]) -> Vec<Attribute> {
        let mut key = attributes.to_vec();
        key.sort_unstable();
        key.dedup();
        key
    }

    pub fn get(&mut self, attributes: &[Attribute]) -> Option<V> {
        match self.values.get(&Self::key(attributes)) {
            Some(&value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, attributes: &[Attribute], value: V) {
        self.values.insert(Self::key(attributes), value);
    }

    /// Drop every cached value
    pub fn invalidate(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
