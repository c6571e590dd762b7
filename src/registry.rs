//! Generational arena for objects with an explicit create/destroy lifecycle.
//!
//! Handles carry a slot index and a generation counter, so a handle to a
//! destroyed object never resolves to whatever later reuses its slot.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

pub struct Handle<T> {
    idx: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub const fn index(self) -> u32 {
        self.idx
    }

    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}@gen{})", self.idx, self.generation)
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

#[derive(Debug)]
pub struct Registry<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    live: usize,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    pub fn create(&mut self, value: T) -> Handle<T> {
        let idx = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.value = Some(value);
            idx
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
            });
            idx
        };
        self.live += 1;
        Handle {
            idx,
            generation: self.slots[idx as usize].generation,
            _marker: PhantomData,
        }
    }

    /// Destroys the object behind `handle`; the handle and all its copies go
    /// stale. Returns `None` for an already stale handle.
    pub fn destroy(&mut self, handle: Handle<T>) -> Option<T> {
        let slot = self.slots.get_mut(handle.idx as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.idx);
        self.live -= 1;
        Some(value)
    }

    pub fn is_alive(&self, handle: Handle<T>) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.slots
            .get(handle.idx as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.slots
            .get_mut(handle.idx as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

/// # Panics
///
/// Panics if the handle is stale.
impl<T> Index<Handle<T>> for Registry<T> {
    type Output = T;

    fn index(&self, handle: Handle<T>) -> &T {
        match self.get(handle) {
            Some(value) => value,
            None => panic!("stale registry handle {handle:?}"),
        }
    }
}

impl<T> IndexMut<Handle<T>> for Registry<T> {
    fn index_mut(&mut self, handle: Handle<T>) -> &mut T {
        match self.get_mut(handle) {
            Some(value) => value,
            None => panic!("stale registry handle {handle:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;

    #[test]
    fn destroyed_handles_go_stale() {
        let mut registry = Registry::new();
        let first = registry.create("first");
        assert_eq!(registry[first], "first");
        assert_eq!(registry.destroy(first), Some("first"));
        assert!(!registry.is_alive(first));
        assert_eq!(registry.destroy(first), None);

        let second = registry.create("second");
        assert_eq!(second.index(), first.index());
        assert_ne!(second.generation(), first.generation());
        assert!(registry.get(first).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "stale registry handle")]
    fn indexing_a_stale_handle_panics() {
        let mut registry = Registry::new();
        let handle = registry.create(1_u8);
        registry.destroy(handle);
        let _ = registry[handle];
    }
}
