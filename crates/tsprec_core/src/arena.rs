//! Arena allocation for syntax trees.
//!
//! Nodes read by the precedence engine hold plain `&'a` references to their
//! children, so every node of a tree lives in one bump arena and the whole
//! tree is released at once when the arena is dropped.

use bumpalo::Bump;

/// Owner of every node in one or more syntax trees.
///
/// The arena never runs destructors for the values it stores; node types
/// are plain data and do not need them.
pub struct NodeArena {
    bump: Bump,
}

impl NodeArena {
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create an arena with `capacity` bytes reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// Move `val` into the arena and return a shared reference with the
    /// arena's lifetime.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Move every item of `items` into one contiguous arena slice.
    #[inline]
    pub fn alloc_slice<T, I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Total bytes handed out so far, across all chunks.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Drop every tree at once while keeping the largest chunk for reuse.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_returns_stable_references() {
        let arena = NodeArena::new();
        let a = arena.alloc(1u32);
        let b = arena.alloc(2u32);
        assert_eq!(*a + *b, 3);
    }

    #[test]
    fn test_alloc_slice_preserves_order() {
        let arena = NodeArena::with_capacity(64);
        let slice = arena.alloc_slice(vec![3u8, 1, 2]);
        assert_eq!(slice, &[3, 1, 2]);
        assert_eq!(arena.alloc_str("name"), "name");
    }

    #[test]
    fn test_reset_releases_allocations() {
        let mut arena = NodeArena::new();
        arena.alloc([0u64; 32]);
        assert!(arena.allocated_bytes() >= 256);
        arena.reset();
        let fresh = arena.alloc(7u8);
        assert_eq!(*fresh, 7);
    }
}
