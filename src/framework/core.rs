//! # Core Store Framework
//!
//! This module defines the generic building blocks for the storage layer.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all stored record types must implement.
//! - [`ResourceStore`]: The generic lock-guarded collection that holds entities.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be held by a [`ResourceStore`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that all our record types (User, Product, Cart, Order)
/// must satisfy, we can write the locking and snapshot logic *once* and reuse it everywhere.
///
/// The associated `Id` type keeps keys type-safe: a `ProductStore` can't be asked for a
/// `UserId`, the compiler rejects it.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. `Ord` is required for sorted listings.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;

    /// Returns the key this entity is stored under.
    fn id(&self) -> &Self::Id;
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// A keyed collection of entities guarded by a single reader/writer lock.
///
/// # Concurrency Model
/// There is exactly one lock per store, covering the whole key space. Lookups share the
/// read lock. Every operation that may mutate state goes through [`ResourceStore::write`],
/// which holds the write lock for the *entire* closure, so a check-then-act sequence can
/// never be split across two acquisitions.
///
/// Records handed out are clones. Callers never hold a live reference into the map.
pub struct ResourceStore<T: Entity> {
    records: RwLock<HashMap<T::Id, T>>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Builds a store pre-populated with `records`. Later duplicates overwrite earlier ones.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let records: HashMap<T::Id, T> = records
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        info!(entity_type = Self::entity_type(), size = records.len(), "Store seeded");
        Self {
            records: RwLock::new(records),
        }
    }

    /// Extract just the type name (e.g., "Product" instead of "shop_store::model::product::Product")
    pub(crate) fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Returns a snapshot of the entity stored under `id`, if any.
    pub fn get(&self, id: &T::Id) -> Option<T> {
        let item = self.read_guard().get(id).cloned();
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    /// Inserts or overwrites the entity under its own id, returning the previous value.
    pub fn insert(&self, item: T) -> Option<T> {
        let id = item.id().clone();
        let mut records = self.write_guard();
        let previous = records.insert(id.clone(), item);
        info!(
            entity_type = Self::entity_type(),
            %id,
            replaced = previous.is_some(),
            size = records.len(),
            "Stored"
        );
        previous
    }

    /// Returns every entity in unspecified order.
    pub fn snapshot(&self) -> Vec<T> {
        let items: Vec<T> = self.read_guard().values().cloned().collect();
        debug!(entity_type = Self::entity_type(), size = items.len(), "Snapshot");
        items
    }

    /// Returns every entity matching `filter`, sorted by id ascending.
    pub fn snapshot_sorted_by_id(&self, filter: impl Fn(&T) -> bool) -> Vec<T> {
        let mut items: Vec<T> = self
            .read_guard()
            .values()
            .filter(|item| filter(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id().cmp(b.id()));
        debug!(entity_type = Self::entity_type(), size = items.len(), "Sorted snapshot");
        items
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `f` with shared access to the whole map.
    pub fn read<R>(&self, f: impl FnOnce(&HashMap<T::Id, T>) -> R) -> R {
        f(&self.read_guard())
    }

    /// Runs `f` with exclusive access to the whole map.
    ///
    /// The write lock is held from before `f` starts until after it returns.
    pub fn write<R>(&self, f: impl FnOnce(&mut HashMap<T::Id, T>) -> R) -> R {
        f(&mut self.write_guard())
    }

    // Critical sections never leave the map half-updated, so a poisoned lock still guards
    // consistent data and is recovered rather than propagated.
    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<T::Id, T>> {
        self.records.read().unwrap_or_else(|poisoned| {
            warn!(entity_type = Self::entity_type(), "Recovered poisoned lock (read)");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<T::Id, T>> {
        self.records.write().unwrap_or_else(|poisoned| {
            warn!(entity_type = Self::entity_type(), "Recovered poisoned lock (write)");
            PoisonError::into_inner(poisoned)
        })
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
