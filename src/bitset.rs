//! Fixed-width capability mask.
//! One bit per registered component type, direct bitwise ops, no allocation.

/// Upper bound on distinct component types a scene can register.
pub const MAX_COMPONENTS: usize = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComponentMask {
    bits: u64,
}

impl ComponentMask {
    pub const EMPTY: ComponentMask = ComponentMask { bits: 0 };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Set the bit at `index`. Indices at or beyond [`MAX_COMPONENTS`] are ignored.
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < MAX_COMPONENTS, "component bit {index} out of range");
        if index < MAX_COMPONENTS {
            self.bits |= 1 << index;
        }
    }

    /// Clear the bit at `index`.
    pub fn reset(&mut self, index: usize) {
        if index < MAX_COMPONENTS {
            self.bits &= !(1 << index);
        }
    }

    /// Clear every bit.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Check if the bit at `index` is set.
    pub fn contains(&self, index: usize) -> bool {
        index < MAX_COMPONENTS && (self.bits & (1 << index)) != 0
    }

    /// True if every bit set in `required` is also set in `self`.
    pub fn is_superset_of(&self, required: &Self) -> bool {
        self.bits & required.bits == required.bits
    }

    /// Returns true if this set shares any set bits with `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        (self.bits & other.bits) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns iterator over indices of set bits, ascending.
    pub fn ones(&self) -> OnesIter {
        OnesIter { current: self.bits }
    }
}

pub struct OnesIter {
    current: u64,
}

impl Iterator for OnesIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        let trailing = self.current.trailing_zeros();
        self.current &= self.current - 1; // clear lowest set bit
        Some(trailing as usize)
    }
}
