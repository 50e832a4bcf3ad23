#![deny(clippy::disallowed_methods)]

#[cfg(feature = "debug")]
use std::collections::BTreeMap;
use std::{fmt, mem, num::NonZeroUsize};

use thiserror::Error;

pub mod ops;

pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(capacity) => capacity,
    None => panic!("default capacity is zero"),
};
// grow once (live + tombstones + the pending insert) / capacity exceeds this
pub const MAX_LOAD_RATIO: f64 = 0.9;
pub const SIZE_RATIO: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
}

/// DJB2 over the UTF-16 code units of `key`, with 32-bit wrapping arithmetic.
pub fn hash(key: &str) -> u32 {
    key.encode_utf16()
        .fold(5381u32, |hash, c| hash.wrapping_mul(33).wrapping_add(u32::from(c)))
}

#[derive(Clone)]
enum Slot<V> {
    Empty,
    Tombstone,
    Occupied { key: Box<str>, value: V },
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

/// A string-keyed hash table using linear probing and lazy deletion.
///
/// Removed entries leave a tombstone behind, which still counts against the
/// load ratio until the next resize rebuilds the slot array without them.
/// The table never shrinks.
#[derive(Clone)]
pub struct ProbingHashTable<V> {
    slots: Vec<Slot<V>>,
    len: usize,
    deleted: usize,
    #[cfg(feature = "debug")]
    pub probe_lengths: BTreeMap<usize, usize>,
}

impl<V> ProbingHashTable<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            slots: empty_slots(capacity.get()),
            len: 0,
            deleted: 0,
            #[cfg(feature = "debug")]
            probe_lengths: BTreeMap::new(),
        }
    }

    // number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    // number of tombstones left since the last resize
    pub fn deleted(&self) -> usize {
        self.deleted
    }

    /// Returns the index of the first slot, walking from the home slot of
    /// `key`, that is either empty or holds `key` live. Tombstones are skipped.
    ///
    /// # Panics
    /// If a full cycle finds neither. The load ratio guard in [`Self::set`]
    /// always leaves an empty slot, so this means the table is corrupt.
    fn find_slot(&self, key: &str) -> usize {
        let capacity = self.capacity();
        let start = hash(key) as usize % capacity;
        (0..capacity)
            .map(|i| (start + i) % capacity)
            .find(|&index| match &self.slots[index] {
                Slot::Empty => true,
                Slot::Occupied { key: k, .. } => &**k == key,
                Slot::Tombstone => false,
            })
            .expect("probe sequence wrapped around without finding an empty slot")
    }

    pub fn get(&self, key: &str) -> Result<&V, Error> {
        match &self.slots[self.find_slot(key)] {
            Slot::Occupied { value, .. } => Ok(value),
            _ => Err(Error::KeyNotFound(key.to_owned())),
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, Error> {
        let index = self.find_slot(key);
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Ok(value),
            _ => Err(Error::KeyNotFound(key.to_owned())),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.slots[self.find_slot(key)], Slot::Occupied { .. })
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// The load ratio is checked before probing, so the table may grow even
    /// when `key` is already present. `key` is only converted into an owned
    /// string when it lands in an empty slot.
    pub fn set<K: AsRef<str> + Into<Box<str>>>(&mut self, key: K, value: V) -> Option<V> {
        let load_ratio = (self.len + self.deleted + 1) as f64 / self.capacity() as f64;
        if load_ratio > MAX_LOAD_RATIO {
            let capacity = self
                .capacity()
                .checked_mul(SIZE_RATIO)
                .expect("multiplication by SIZE_RATIO overflows a usize");
            self.resize(capacity);
        }
        self.insert_raw(key, value)
    }

    /// Marks the slot holding `key` as a tombstone and hands back its value.
    pub fn remove(&mut self, key: &str) -> Result<V, Error> {
        let index = self.find_slot(key);
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                self.deleted += 1;
                Ok(value)
            }
            empty => {
                self.slots[index] = empty;
                Err(Error::KeyNotFound(key.to_owned()))
            }
        }
    }

    // never resizes; both `set` and `resize` go through here
    fn insert_raw<K: AsRef<str> + Into<Box<str>>>(&mut self, key: K, value: V) -> Option<V> {
        let index = self.find_slot(key.as_ref());
        #[cfg(feature = "debug")]
        {
            let capacity = self.capacity();
            let home = hash(key.as_ref()) as usize % capacity;
            *self
                .probe_lengths
                .entry((index + capacity - home) % capacity)
                .or_insert(0) += 1;
        }
        match &mut self.slots[index] {
            Slot::Occupied { value: old, .. } => Some(mem::replace(old, value)),
            slot => {
                debug_assert!(matches!(slot, Slot::Empty));
                *slot = Slot::Occupied {
                    key: key.into(),
                    value,
                };
                self.len += 1;
                None
            }
        }
    }

    fn resize(&mut self, capacity: usize) {
        let old = mem::replace(&mut self.slots, empty_slots(capacity));
        self.len = 0;
        self.deleted = 0;
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                self.insert_raw(key, value);
            }
        }
    }

    // live entries in storage order
    fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((&**key, value)),
            _ => None,
        })
    }

    pub fn invariants(&self) -> bool {
        self.invariant1()
            && self.invariant2()
            && self.invariant3()
            && self.invariant4()
            && self.invariant5()
    }

    fn invariant1(&self) -> bool {
        !self.slots.is_empty()
    }

    fn invariant2(&self) -> bool {
        self.entries().count() == self.len
    }

    fn invariant3(&self) -> bool {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Tombstone))
            .count()
            == self.deleted
    }

    // the load guard must leave room for every probe to terminate
    fn invariant4(&self) -> bool {
        self.len + self.deleted < self.capacity()
            && self.slots.iter().any(|slot| matches!(slot, Slot::Empty))
    }

    // every live key is the first match on its own probe sequence, so keys are
    // unique and reachable
    fn invariant5(&self) -> bool {
        self.slots.iter().enumerate().all(|(index, slot)| match slot {
            Slot::Occupied { key, .. } => self.find_slot(key) == index,
            _ => true,
        })
    }
}

impl<V> Default for ProbingHashTable<V> {
    fn default() -> Self {
        ProbingHashTable::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ProbingHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a, V>(&'a ProbingHashTable<V>);
        impl<V: fmt::Debug> fmt::Debug for Entries<'_, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0.entries()).finish()
            }
        }

        f.debug_struct("ProbingHashTable")
            .field("entries", &Entries(self))
            .field("len", &self.len)
            .field("deleted", &self.deleted)
            .field("capacity", &self.capacity())
            .finish()
    }
}
