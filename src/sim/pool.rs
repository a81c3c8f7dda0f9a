//! Fixed-capacity entity storage
//!
//! Slots are allocated once and reused forever. A slot is either live or free;
//! claiming scans for the first free slot and never grows the pool.

use serde::{Deserialize, Serialize};

/// An entity that can occupy a pool slot
pub trait Slot: Default {
    /// Whether the slot currently holds a live entity
    fn is_live(&self) -> bool;

    /// Mark the slot free for reuse
    fn release(&mut self);
}

/// Fixed-capacity arena of `T` slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot> Pool<T> {
    /// Create a pool with `capacity` free slots
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, T::default);
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `entity` in the first free slot.
    ///
    /// Returns the slot index, or `None` when every slot is live.
    pub fn claim(&mut self, entity: T) -> Option<usize> {
        let index = self.slots.iter().position(|slot| !slot.is_live())?;
        self.slots[index] = entity;
        Some(index)
    }

    /// Free the slot at `index` (no-op when out of range)
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.release();
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(Slot::release);
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_live()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(Slot::is_live)
    }

    /// Live entity at `index`, if any
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).filter(|slot| slot.is_live())
    }

    /// Mutable live entity at `index`, if any
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).filter(|slot| slot.is_live())
    }

    /// Live entities in slot order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.is_live())
    }

    /// Mutable live entities in slot order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| slot.is_live())
    }

    /// Live entities paired with their slot index
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots.iter().enumerate().filter(|(_, slot)| slot.is_live())
    }
}
