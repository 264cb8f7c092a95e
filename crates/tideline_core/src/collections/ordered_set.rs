//! Insertion-ordered, identity-keyed collection.
//!
//! # Responsibility
//! - Hold items of one type keyed by [`Keyed::key`], in an explicit order.
//! - Provide the add/reorder/retain primitives every reconciliation step is
//!   built from.
//!
//! # Invariants
//! - Keys are unique; `order` and `values` always hold the same key set.
//! - Order lives in `order` only; the map is never iterated for ordering.
//! - Without reordering, an item's position is fixed at first insertion.
//!
//! # Complexity
//! - Key lookups are hashed. Anything positional (`index_of`, `add_at` with
//!   reordering, `remove`) scans `order`, so a reordering `add_all_at` of `k`
//!   items into `n` is `O(k * n)`. Child lists are short enough for this.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Identity extraction for [`OrderedSet`] items.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl<T: Keyed + ?Sized> Keyed for Rc<T> {
    fn key(&self) -> &str {
        (**self).key()
    }
}

/// Ordered set of raw GUID strings, used for child-reference lists.
pub type OrderedStringSet = OrderedSet<String>;

/// Ordered identity set.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSet<V> {
    order: Vec<String>,
    values: HashMap<String, V>,
}

impl<V> Default for OrderedSet<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<V: Keyed> OrderedSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `values`; later duplicates of a key are ignored.
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        let mut set = Self::new();
        set.add_all(values);
        set
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Item stored under `key`, if any.
    pub fn value_for(&self, key: &str) -> Option<&V> {
        self.values.get(key)
    }

    /// Item at `index` in display order.
    pub fn value_at(&self, index: usize) -> Option<&V> {
        let key = self.order.get(index)?;
        self.values.get(key)
    }

    /// Display position of `key`. Linear in the set's length.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        if !self.values.contains_key(key) {
            return None;
        }
        self.order.iter().position(|candidate| candidate == key)
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|key| self.values.get(key))
    }

    /// Appends `value` unless its key is already present.
    ///
    /// Returns `true` when the value was stored.
    pub fn add(&mut self, value: V) -> bool {
        self.add_at(value, None, false)
    }

    /// Inserts `value` at `index` (clamped; `None` appends).
    ///
    /// When the key already exists and `allow_reorder` is `false`, the existing
    /// entry keeps its place and `value` is dropped. With `allow_reorder`, the
    /// existing entry is removed first and `value` is inserted at `index`.
    /// Returns `true` when `value` was stored. Moving an existing key costs a
    /// scan of the order list.
    pub fn add_at(&mut self, value: V, index: Option<usize>, allow_reorder: bool) -> bool {
        let key = value.key().to_string();
        if self.values.contains_key(&key) {
            if !allow_reorder {
                return false;
            }
            if let Some(old_index) = self.order.iter().position(|candidate| *candidate == key) {
                self.order.remove(old_index);
            }
        }
        let position = index.unwrap_or(self.order.len()).min(self.order.len());
        self.order.insert(position, key.clone());
        self.values.insert(key, value);
        true
    }

    /// Appends every value in turn with [`OrderedSet::add`].
    pub fn add_all(&mut self, values: impl IntoIterator<Item = V>) {
        self.add_all_at(values, None, false);
    }

    /// Adds `values` as a block starting at `index`, keeping their relative order.
    ///
    /// The running position advances only when a value is stored, so ignored
    /// duplicates do not leave gaps. `None` appends each value at the current end.
    pub fn add_all_at(
        &mut self,
        values: impl IntoIterator<Item = V>,
        index: Option<usize>,
        allow_reorder: bool,
    ) {
        let mut position = index;
        for value in values {
            if self.add_at(value, position, allow_reorder) {
                position = position.map(|current| current + 1);
            }
        }
    }

    /// Removes the item stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.values.remove(key)?;
        self.order.retain(|candidate| candidate != key);
        Some(value)
    }

    /// Removes the item at `index` in display order.
    pub fn remove_at(&mut self, index: usize) -> Option<V> {
        if index >= self.order.len() {
            return None;
        }
        let key = self.order.remove(index);
        self.values.remove(&key)
    }

    /// Keeps only items whose key equals the key of some item in `values`.
    ///
    /// Survivors keep their relative order. Returns the removed items in their
    /// former display order.
    pub fn retain_values(&mut self, values: &[V]) -> Vec<V> {
        self.retain_ids(values.iter().map(Keyed::key))
    }

    /// Keeps only items whose key appears in `ids`.
    ///
    /// Survivors keep their relative order. Returns the removed items in their
    /// former display order.
    pub fn retain_ids<I>(&mut self, ids: I) -> Vec<V>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keep: HashSet<String> = ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        let mut removed = Vec::new();
        let mut survivors = Vec::with_capacity(self.order.len());
        for key in self.order.drain(..) {
            if keep.contains(&key) {
                survivors.push(key);
            } else if let Some(value) = self.values.remove(&key) {
                removed.push(value);
            }
        }
        self.order = survivors;
        removed
    }

    /// Moves the keys named in `ids` to the front, in that order.
    ///
    /// Unknown and repeated ids are skipped. Keys not named keep their relative
    /// order after the named ones. Stored values are never touched.
    pub fn reorder<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut placed = HashSet::with_capacity(self.order.len());
        let mut order = Vec::with_capacity(self.order.len());
        for id in ids {
            let id = id.as_ref();
            if self.values.contains_key(id) && placed.insert(id.to_string()) {
                order.push(id.to_string());
            }
        }
        order.extend(
            self.order
                .iter()
                .filter(|key| !placed.contains(key.as_str()))
                .cloned(),
        );
        self.order = order;
    }

    /// Removes every item.
    pub fn remove_all(&mut self) -> Vec<V> {
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|key| self.values.remove(&key))
            .collect()
    }

    /// Items in display order, cloned.
    pub fn to_array(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Projects every item in display order.
    pub fn map<T>(&self, f: impl FnMut(&V) -> T) -> Vec<T> {
        self.iter().map(f).collect()
    }
}

impl<V: Keyed> FromIterator<V> for OrderedSet<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::from_values(iter)
    }
}

impl<V: Keyed> Extend<V> for OrderedSet<V> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.add_all(iter);
    }
}

impl OrderedStringSet {
    /// Builds a GUID set from borrowed strings.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ids.into_iter().map(|id| id.as_ref().to_string()).collect()
    }
}
