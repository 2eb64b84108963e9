//! Flag types attached to syntax nodes.

bitflags::bitflags! {
    /// Per-node flags. Bit positions follow TypeScript's NodeFlags so that
    /// values exchanged with other tools keep their meaning.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const NONE                          = 0;
        /// Node was created by a transformation rather than parsed.
        const SYNTHESIZED                   = 1 << 5;
        /// Node is part of an optional chain (`a?.b`, `a?.[0]`, `a?.()`, and
        /// everything chained after them).
        const OPTIONAL_CHAIN                = 1 << 7;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        NodeFlags::NONE
    }
}
