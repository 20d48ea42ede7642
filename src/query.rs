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

//! Query system with capability-mask filtering
//!
//! A query selects live entities whose mask is a superset of the mask built
//! from its [`ComponentSet`]. Results come out in ascending slot order and
//! every iteration is a single linear pass over the entity table.
//!
//! [`Query`] borrows the scene for the whole scan. [`QueryCursor`] holds only
//! a slot position, so callers can mutate the scene between steps; matches
//! are then only as stable as the table itself.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::bitset::ComponentMask;
use crate::component::ComponentSet;
use crate::entity::{EntityId, EntityRecord};
use crate::scene::Scene;

#[inline]
fn matches(required: Option<ComponentMask>, record: &EntityRecord) -> bool {
    match required {
        Some(mask) => record.is_alive() && record.mask.is_superset_of(&mask),
        // a member type was never registered, so nothing can carry it
        None => false,
    }
}

/// Resolved requirement mask for `Q`.
pub struct QueryState<Q: ComponentSet> {
    required: Option<ComponentMask>,
    _phantom: PhantomData<fn() -> Q>,
}

impl<Q: ComponentSet> QueryState<Q> {
    pub fn new(scene: &Scene) -> Self {
        Self {
            required: Q::mask(scene.registry()),
            _phantom: PhantomData,
        }
    }

    /// `None` if some member of `Q` is unknown to the scene.
    pub fn required(&self) -> Option<ComponentMask> {
        self.required
    }

    pub fn matches(&self, record: &EntityRecord) -> bool {
        matches(self.required, record)
    }

    /// Fresh scan over `scene`.
    pub fn iter<'s>(&self, scene: &'s Scene) -> QueryIter<'s> {
        QueryIter::new(scene.entities(), self.required)
    }

    /// Detached cursor starting at slot 0.
    pub fn cursor(&self) -> QueryCursor {
        QueryCursor {
            required: self.required,
            position: 0,
        }
    }
}

impl<Q: ComponentSet> Clone for QueryState<Q> {
    fn clone(&self) -> Self {
        Self {
            required: self.required,
            _phantom: PhantomData,
        }
    }
}

/// Restartable query bound to a scene.
pub struct Query<'s, Q: ComponentSet> {
    scene: &'s Scene,
    state: QueryState<Q>,
}

impl<'s, Q: ComponentSet> Query<'s, Q> {
    pub fn new(scene: &'s Scene) -> Self {
        Self {
            scene,
            state: QueryState::new(scene),
        }
    }

    /// Start a new scan from the first slot.
    pub fn iter(&self) -> QueryIter<'s> {
        self.state.iter(self.scene)
    }

    /// Count matching entities
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn state(&self) -> &QueryState<Q> {
        &self.state
    }
}

impl<'q, 's, Q: ComponentSet> IntoIterator for &'q Query<'s, Q> {
    type Item = EntityId;
    type IntoIter = QueryIter<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, Q: ComponentSet> IntoIterator for Query<'s, Q> {
    type Item = EntityId;
    type IntoIter = QueryIter<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Single-pass iterator over matching entity ids.
#[derive(Clone)]
pub struct QueryIter<'s> {
    records: &'s [EntityRecord],
    required: Option<ComponentMask>,
    position: usize,
}

impl<'s> QueryIter<'s> {
    fn new(records: &'s [EntityRecord], required: Option<ComponentMask>) -> Self {
        // an unsatisfiable query starts exhausted
        let position = if required.is_some() { 0 } else { records.len() };
        Self {
            records,
            required,
            position,
        }
    }
}

impl Iterator for QueryIter<'_> {
    type Item = EntityId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(record) = self.records.get(self.position) {
            self.position += 1;
            if matches(self.required, record) {
                return Some(record.id);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.records.len().saturating_sub(self.position)))
    }
}

impl FusedIterator for QueryIter<'_> {}

/// Query position that does not borrow the scene.
///
/// Each [`advance`](QueryCursor::advance) resumes the linear scan where the
/// previous one stopped.
#[derive(Debug, Clone)]
pub struct QueryCursor {
    required: Option<ComponentMask>,
    position: usize,
}

impl QueryCursor {
    /// Next matching entity at or after the current position.
    pub fn advance(&mut self, scene: &Scene) -> Option<EntityId> {
        self.required?;
        let records = scene.entities();
        while let Some(record) = records.get(self.position) {
            self.position += 1;
            if matches(self.required, record) {
                return Some(record.id);
            }
        }
        None
    }

    /// Rewind to the first slot.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
