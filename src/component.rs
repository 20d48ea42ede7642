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

//! Component trait, component sets and the capability registry
//!
//! Every component type a scene sees gets a small stable integer, its bit in
//! the [`ComponentMask`]. The table is owned by the scene and filled either
//! up front through explicit registration or on first use.

use std::any::TypeId;

use ahash::AHashMap;
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::bitset::{ComponentMask, MAX_COMPONENTS};
use crate::error::{CapacityError, Result};

/// Maximum number of components in a single [`ComponentSet`] tuple
pub const MAX_SET_COMPONENTS: usize = 8;

/// Marker trait for components
///
/// Components must be 'static (no borrowed data)
pub trait Component: 'static + Send + Sync {}

/// Automatically implement Component for all valid types
impl<T: 'static + Send + Sync> Component for T {}

/// Stable per-scene identifier of a component type; doubles as its mask bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(u8);

impl ComponentTypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Registration table mapping component types to mask bits.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    ids: AHashMap<TypeId, ComponentTypeId>,
    names: Vec<&'static str>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `T`, issuing the next unused one on first call.
    pub fn register<T: Component>(&mut self) -> Result<ComponentTypeId> {
        let type_id = TypeId::of::<T>();
        if let Some(&id) = self.ids.get(&type_id) {
            return Ok(id);
        }
        if self.names.len() >= MAX_COMPONENTS {
            return Err(CapacityError::ComponentTypes {
                capacity: MAX_COMPONENTS,
            }
            .into());
        }
        let id = ComponentTypeId(self.names.len() as u8);
        let name = std::any::type_name::<T>();
        self.ids.insert(type_id, id);
        self.names.push(name);
        trace!(component = name, id = id.index(), "registered component type");
        Ok(id)
    }

    /// Id for `T` if it has been registered.
    pub fn id_of<T: Component>(&self) -> Option<ComponentTypeId> {
        self.ids.get(&TypeId::of::<T>()).copied()
    }

    pub fn id_by_type(&self, type_id: TypeId) -> Option<ComponentTypeId> {
        self.ids.get(&type_id).copied()
    }

    /// Type name recorded at registration.
    pub fn name(&self, id: ComponentTypeId) -> Option<&'static str> {
        self.names.get(id.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A set of component types, used to describe what a query requires.
///
/// Implemented for `()` (no requirement) and tuples of up to eight types.
pub trait ComponentSet: 'static {
    /// Get type IDs of all components in the set
    fn type_ids() -> SmallVec<[TypeId; MAX_SET_COMPONENTS]>;

    /// Mask with one bit per member, or `None` if any member was never
    /// registered (no entity can carry it).
    fn mask(registry: &ComponentRegistry) -> Option<ComponentMask> {
        let mut mask = ComponentMask::new();
        for type_id in Self::type_ids() {
            mask.set(registry.id_by_type(type_id)?.index());
        }
        Some(mask)
    }
}

impl ComponentSet for () {
    fn type_ids() -> SmallVec<[TypeId; MAX_SET_COMPONENTS]> {
        SmallVec::new()
    }
}

macro_rules! impl_component_set {
    ($($T:ident),*) => {
        impl<$($T: Component),*> ComponentSet for ($($T,)*) {
            fn type_ids() -> SmallVec<[TypeId; MAX_SET_COMPONENTS]> {
                smallvec![$(TypeId::of::<$T>()),*]
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
