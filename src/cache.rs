//! Direct-mapped cache of generated move lists keyed by position hash.

use log::debug;

use crate::board::MoveList;

/// Prime table size keeps hash % capacity well distributed even when the
/// low hash bits correlate.
pub const DEFAULT_CACHE_SIZE: usize = 251_611;

struct CacheEntry {
    hash: u64,
    moves: MoveList,
}

/// Direct-mapped, replace-always cache of legal move lists.
///
/// Each position hash maps to exactly one slot; a colliding insert evicts
/// whatever was there. Probes compare the full 64-bit hash before returning
/// a hit, so an index collision never returns the wrong move list.
pub struct MoveCache {
    entries: Vec<Option<Box<CacheEntry>>>,
    capacity: usize,
    inserts: u64,
    hits: u64,
    misses: u64,
}

impl MoveCache {
    /// Create a cache with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_SIZE)
    }

    /// Create a cache with an explicit slot count
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be nonzero");
        let mut entries = Vec::with_capacity(capacity);
        entries.resize_with(capacity, || None);
        MoveCache {
            entries,
            capacity,
            inserts: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up the move list stored for `hash`, if any
    pub fn probe(&mut self, hash: u64) -> Option<&MoveList> {
        let idx = (hash % self.capacity as u64) as usize;
        let hit = matches!(&self.entries[idx], Some(entry) if entry.hash == hash);
        if hit {
            self.hits += 1;
            self.entries[idx].as_deref().map(|e| &e.moves)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Store `moves` for `hash`, evicting any previous occupant of the slot
    pub fn insert(&mut self, hash: u64, moves: MoveList) {
        let idx = (hash % self.capacity as u64) as usize;
        if let Some(old) = &self.entries[idx] {
            if old.hash != hash {
                debug!("cache slot {idx} evicted (old hash {:#x})", old.hash);
            }
        }
        self.entries[idx] = Some(Box::new(CacheEntry { hash, moves }));
        self.inserts += 1;
    }

    /// Drop every stored entry, keeping the capacity and counters
    pub fn clear(&mut self) {
        for slot in &mut self.entries {
            *slot = None;
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    #[inline]
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for MoveCache {
    fn default() -> Self {
        MoveCache::new()
    }
}
