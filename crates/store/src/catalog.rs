//! Fruit Catalog Module
//!
//! This module implements the in-memory fruit collection. The store is the
//! sole owner of all fruit records: it assigns sequential ids, enforces
//! name uniqueness, and answers reads with value copies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::StoreError;

/// A single catalog entry. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    /// Positive, unique, assigned by the store at insertion time
    pub id: u64,
    /// Non-empty, unique across all live fruits (case-sensitive)
    pub name: String,
    /// Strictly greater than zero
    pub price: f64,
}

/// A validated create request, produced by the validator and not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFruit {
    pub name: String,
    pub price: f64,
}

/// In-memory fruit collection with monotonic id assignment.
///
/// Ids come from a store-internal counter rather than the collection length,
/// so they stay consistent if deletions are ever introduced.
#[derive(Debug)]
pub struct FruitStore {
    /// Fruits in insertion order
    fruits: Vec<Fruit>,
    /// Next id to assign; starts at 1, advances on every successful insert
    next_id: u64,
}

impl FruitStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            fruits: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a validated fruit, enforcing name uniqueness.
    ///
    /// On a name collision the store is left untouched and the call fails
    /// with [`StoreError::DuplicateName`]. On success the stored fruit is
    /// returned with its assigned id.
    pub fn insert(&mut self, new: NewFruit) -> Result<Fruit, StoreError> {
        if self.fruits.iter().any(|f| f.name == new.name) {
            return Err(StoreError::DuplicateName { name: new.name });
        }

        let fruit = Fruit {
            id: self.next_id,
            name: new.name,
            price: new.price,
        };
        self.next_id += 1;

        debug!(id = fruit.id, name = %fruit.name, "fruit inserted");
        self.fruits.push(fruit.clone());
        Ok(fruit)
    }

    /// Get a copy of the fruit with the given id.
    pub fn get_by_id(&self, id: u64) -> Result<Fruit, StoreError> {
        self.fruits
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// All fruits in insertion order. An empty store yields an empty vec.
    pub fn list(&self) -> Vec<Fruit> {
        self.fruits.clone()
    }

    /// Number of fruits currently stored.
    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    /// Whether the store holds no fruits.
    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    /// Administrative reset: drop every fruit and restart ids at 1.
    ///
    /// Not reachable from the HTTP surface; exists for test isolation.
    pub fn clear(&mut self) {
        self.fruits.clear();
        self.next_id = 1;
    }
}

impl Default for FruitStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw lookup key as a positive fruit id.
///
/// Rejects anything that is not a base-10 positive integer with
/// [`StoreError::InvalidIdFormat`], before any collection scan happens.
pub fn parse_fruit_id(raw: &str) -> Result<u64, StoreError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(StoreError::InvalidIdFormat {
            raw: raw.to_string(),
        }),
    }
}
