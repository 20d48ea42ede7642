// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-type component pools
//!
//! A pool is a bounded arena addressed by entity slot index. It never grows
//! past the scene's entity capacity and owns the lifetime of what it stores:
//! overwriting or clearing a slot drops the previous value.

use std::any::Any;

use crate::component::Component;
use crate::error::{CapacityError, Result};

/// Type-erased view of a pool, used where the component type is only known
/// by its mask bit (e.g. entity destruction).
pub trait ComponentStorage: Send + Sync {
    /// Drop whatever the slot holds.
    fn clear_slot(&mut self, index: usize);

    /// Whether the slot currently holds a value.
    fn is_occupied(&self, index: usize) -> bool;

    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Fixed-capacity slot array for one component type.
pub struct ComponentPool<T: Component> {
    slots: Vec<Option<T>>,
    capacity: usize,
}

impl<T: Component> ComponentPool<T> {
    /// Create an empty pool addressable up to `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store `value` at `index`, returning the previous occupant (already
    /// moved out, so the caller decides when it drops).
    pub fn insert(&mut self, index: usize, value: T) -> Result<Option<T>> {
        if index >= self.capacity {
            return Err(CapacityError::Entities {
                capacity: self.capacity,
            }
            .into());
        }
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        Ok(self.slots[index].replace(value))
    }

    /// Move the value out of `index`, leaving the slot empty.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl<T: Component> ComponentStorage for ComponentPool<T> {
    fn clear_slot(&mut self, index: usize) {
        drop(self.take(index));
    }

    fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
