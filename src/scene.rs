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

//! Scene: entity table, slot freelist and per-type component pools

use tracing::{debug, trace};

use crate::component::{Component, ComponentRegistry, ComponentSet, ComponentTypeId};
use crate::config::SceneConfig;
use crate::entity::{EntityId, EntityIndex, EntityRecord, INVALID_INDEX};
use crate::error::{CapacityError, EcsError, Result};
use crate::query::Query;
use crate::storage::{ComponentPool, ComponentStorage};

type RegisterFn = fn(&mut ComponentRegistry) -> Result<ComponentTypeId>;

fn register_fn<T: Component>(registry: &mut ComponentRegistry) -> Result<ComponentTypeId> {
    registry.register::<T>()
}

type PoolSlot = Option<Box<dyn ComponentStorage>>;

fn typed_pool<T: Component>(pools: &[PoolSlot], id: ComponentTypeId) -> Option<&ComponentPool<T>> {
    pools
        .get(id.index())?
        .as_ref()?
        .as_any()
        .downcast_ref::<ComponentPool<T>>()
}

fn typed_pool_mut<T: Component>(
    pools: &mut [PoolSlot],
    id: ComponentTypeId,
) -> Option<&mut ComponentPool<T>> {
    pools
        .get_mut(id.index())?
        .as_mut()?
        .as_any_mut()
        .downcast_mut::<ComponentPool<T>>()
}

fn missing<T: Component>(entity: EntityId) -> EcsError {
    EcsError::MissingComponent {
        entity,
        component: std::any::type_name::<T>(),
    }
}

/// Central entity/component store.
///
/// Slot `i` of the entity table and slot `i` of every pool belong to the same
/// entity. Bit `T` of an entity's mask is set exactly when pool `T` holds a
/// value at that entity's slot.
pub struct Scene {
    config: SceneConfig,

    /// Authoritative id and capability mask per slot
    entities: Vec<EntityRecord>,

    /// Tombstoned slots available for reuse
    freelist: Vec<EntityIndex>,

    /// Tombstoned slots whose version is exhausted; never reused
    retired: usize,

    /// One pool per component type, indexed by `ComponentTypeId`
    pools: Vec<PoolSlot>,

    registry: ComponentRegistry,
}

impl Scene {
    /// Create a scene with the default entity ceiling.
    pub fn new() -> Self {
        Self::from_parts(SceneConfig::default(), ComponentRegistry::new())
    }

    /// Create a scene with explicit bounds.
    pub fn with_config(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, ComponentRegistry::new()))
    }

    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    fn from_parts(config: SceneConfig, registry: ComponentRegistry) -> Self {
        Self {
            // Start small; the table only grows up to `max_entities`
            entities: Vec::with_capacity(config.max_entities.min(1024)),
            freelist: Vec::new(),
            retired: 0,
            pools: Vec::new(),
            registry,
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Maximum number of simultaneously allocated slots.
    pub fn capacity(&self) -> usize {
        self.config.max_entities
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len() - self.freelist.len() - self.retired
    }

    /// Number of slots ever handed out (live or tombstoned).
    pub fn slot_count(&self) -> usize {
        self.entities.len()
    }

    /// Read-only entity table, in slot order.
    pub fn entities(&self) -> &[EntityRecord] {
        &self.entities
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Register `T` ahead of use and return its stable id.
    pub fn register<T: Component>(&mut self) -> Result<ComponentTypeId> {
        self.registry.register::<T>()
    }

    pub fn component_id<T: Component>(&self) -> Option<ComponentTypeId> {
        self.registry.id_of::<T>()
    }

    /// Allocate an entity, reusing a tombstoned slot when one is available.
    pub fn create_entity(&mut self) -> Result<EntityId> {
        if let Some(index) = self.freelist.pop() {
            let record = &mut self.entities[index as usize];
            // version was already bumped when the slot was tombstoned
            let id = EntityId::new(index, record.id.version());
            record.id = id;
            record.mask.clear();
            trace!(entity = %id, "reused entity slot");
            return Ok(id);
        }

        if self.entities.len() >= self.config.max_entities {
            return Err(CapacityError::Entities {
                capacity: self.config.max_entities,
            }
            .into());
        }

        let id = EntityId::new(self.entities.len() as EntityIndex, 0);
        self.entities.push(EntityRecord {
            id,
            mask: Default::default(),
        });
        trace!(entity = %id, "created entity");
        Ok(id)
    }

    /// Destroy an entity and every component it carries.
    pub fn destroy_entity(&mut self, id: EntityId) -> Result<()> {
        let index = self.slot_of(id)?;
        let mask = self.entities[index].mask;

        for bit in mask.ones() {
            if let Some(Some(pool)) = self.pools.get_mut(bit) {
                debug_assert!(
                    pool.is_occupied(index),
                    "mask bit {bit} set but {} pool slot {index} is empty",
                    pool.type_name()
                );
                pool.clear_slot(index);
            }
        }

        let record = &mut self.entities[index];
        record.mask.clear();

        // a wrapped version would revive old handles, so the slot is retired
        let Some(version) = id.version().checked_add(1) else {
            record.id = EntityId::new(INVALID_INDEX, id.version());
            self.retired += 1;
            debug!(entity = %id, "entity slot version exhausted, retiring slot");
            return Ok(());
        };
        record.id = EntityId::new(INVALID_INDEX, version);
        self.freelist.push(index as EntityIndex);
        trace!(entity = %id, "destroyed entity");
        Ok(())
    }

    /// True if `id` names the current occupant of its slot.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.slot_of(id).is_ok()
    }

    /// O(1) mask test. Does not check that `id` is the slot's current
    /// version; unknown types and out-of-range ids report `false`.
    pub fn has_component<T: Component>(&self, id: EntityId) -> bool {
        let Some(component) = self.registry.id_of::<T>() else {
            return false;
        };
        self.entities
            .get(id.index() as usize)
            .is_some_and(|record| record.mask.contains(component.index()))
    }

    /// Attach `value` to the entity, dropping any instance of `T` it already
    /// carried. Registers `T` on first use.
    pub fn add_component<T: Component>(&mut self, id: EntityId, value: T) -> Result<&mut T> {
        let index = self.slot_of(id)?;
        let component = self.registry.register::<T>()?;

        if self.pools.len() <= component.index() {
            self.pools.resize_with(component.index() + 1, || None);
        }
        if self.pools[component.index()].is_none() {
            let pool = ComponentPool::<T>::new(self.config.max_entities);
            self.pools[component.index()] = Some(Box::new(pool));
        }

        let pool = typed_pool_mut::<T>(&mut self.pools, component).ok_or_else(|| missing::<T>(id))?;
        drop(pool.insert(index, value)?);
        self.entities[index].mask.set(component.index());

        typed_pool_mut::<T>(&mut self.pools, component)
            .and_then(|pool| pool.get_mut(index))
            .ok_or_else(|| missing::<T>(id))
    }

    /// Detach `T` from the entity and hand the value back.
    pub fn remove_component<T: Component>(&mut self, id: EntityId) -> Result<T> {
        let index = self.slot_of(id)?;
        let component = self.present::<T>(id, index)?;

        self.entities[index].mask.reset(component.index());
        typed_pool_mut::<T>(&mut self.pools, component)
            .and_then(|pool| pool.take(index))
            .ok_or_else(|| missing::<T>(id))
    }

    /// Borrow the entity's `T`. The reference is valid until the next
    /// structural change to the scene.
    pub fn get_component<T: Component>(&self, id: EntityId) -> Result<&T> {
        let index = self.slot_of(id)?;
        let component = self.present::<T>(id, index)?;
        typed_pool::<T>(&self.pools, component)
            .and_then(|pool| pool.get(index))
            .ok_or_else(|| missing::<T>(id))
    }

    pub fn get_component_mut<T: Component>(&mut self, id: EntityId) -> Result<&mut T> {
        let index = self.slot_of(id)?;
        let component = self.present::<T>(id, index)?;
        typed_pool_mut::<T>(&mut self.pools, component)
            .and_then(|pool| pool.get_mut(index))
            .ok_or_else(|| missing::<T>(id))
    }

    /// Lazy view over live entities carrying every type in `Q`.
    pub fn query<Q: ComponentSet>(&self) -> Query<'_, Q> {
        Query::new(self)
    }

    /// Resolve `id` to its slot, rejecting sentinel, out-of-range and stale
    /// handles.
    fn slot_of(&self, id: EntityId) -> Result<usize> {
        if !id.is_valid() {
            return Err(EcsError::InvalidEntity(id));
        }
        let index = id.index() as usize;
        let record = self
            .entities
            .get(index)
            .ok_or(EcsError::InvalidEntity(id))?;
        if record.id != id {
            return Err(EcsError::StaleHandle(id));
        }
        Ok(index)
    }

    fn present<T: Component>(&self, id: EntityId, index: usize) -> Result<ComponentTypeId> {
        let component = self.registry.id_of::<T>().ok_or_else(|| missing::<T>(id))?;
        if !self.entities[index].mask.contains(component.index()) {
            return Err(missing::<T>(id));
        }
        Ok(component)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a scene with its component table registered up front.
pub struct SceneBuilder {
    config: SceneConfig,
    registrations: Vec<RegisterFn>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            config: SceneConfig::default(),
            registrations: Vec::new(),
        }
    }

    pub fn config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_entities(mut self, max_entities: usize) -> Self {
        self.config.max_entities = max_entities;
        self
    }

    /// Queue `T` for registration; ids follow call order.
    pub fn with_component<T: Component>(mut self) -> Self {
        self.registrations.push(register_fn::<T>);
        self
    }

    pub fn build(self) -> Result<Scene> {
        self.config.validate()?;
        let mut registry = ComponentRegistry::new();
        for register in self.registrations {
            register(&mut registry)?;
        }
        Ok(Scene::from_parts(self.config, registry))
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
