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

//! Entity identifiers and slot records.
//!
//! An [`EntityId`] packs a 32-bit slot index into the upper half of a `u64`
//! and a 32-bit version counter into the lower half. The index addresses the
//! entity table and every component pool at the same offset; the version
//! detects handles to a slot that has since been reused.

use std::fmt;

use crate::bitset::ComponentMask;

/// Slot index half of an [`EntityId`].
pub type EntityIndex = u32;

/// Version half of an [`EntityId`].
pub type EntityVersion = u32;

/// Reserved index marking a destroyed (tombstoned) identifier.
pub const INVALID_INDEX: EntityIndex = EntityIndex::MAX;

/// Generational entity handle: `(index << 32) | version`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Handle that never refers to a live entity.
    pub const INVALID: EntityId = EntityId::new(INVALID_INDEX, 0);

    /// Compose a handle from a slot index and a version.
    #[inline]
    pub const fn new(index: EntityIndex, version: EntityVersion) -> Self {
        Self(((index as u64) << 32) | version as u64)
    }

    /// Slot index stored in the upper 32 bits.
    #[inline]
    pub const fn index(self) -> EntityIndex {
        (self.0 >> 32) as EntityIndex
    }

    /// Version stored in the lower 32 bits.
    #[inline]
    pub const fn version(self) -> EntityVersion {
        self.0 as EntityVersion
    }

    /// A handle is valid unless its index is the reserved sentinel.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.index() != INVALID_INDEX
    }

    /// Raw packed representation.
    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "EntityId({}v{})", self.index(), self.version())
        } else {
            write!(f, "EntityId(dead v{})", self.version())
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One row of the entity table: the authoritative id for the slot plus the
/// capability mask of components the occupant currently carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRecord {
    pub id: EntityId,
    pub mask: ComponentMask,
}

impl EntityRecord {
    /// Whether the slot is occupied by a live entity.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.id.is_valid()
    }
}
