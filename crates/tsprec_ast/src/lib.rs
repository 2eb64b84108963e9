//! tsprec_ast: the syntax kind taxonomy and the node model the precedence
//! engine reads.
//!
//! [`SyntaxKind`] is the closed set of token and node kinds, ordered so that
//! each semantic group occupies a contiguous run of ordinals. The node
//! enums ([`Expression`], [`TypeNode`]) are arena-allocated and immutable.

pub mod factory;
pub mod generated;
pub mod kind_ranges;
pub mod node;
pub mod syntax_kind;
pub mod types;
pub mod utilities;

// Re-export key types
pub use factory::NodeFactory;
pub use kind_ranges::{
    ensure_kind_ranges, validate_kind_ranges, KindRange, KindRangeError, KIND_RANGES,
};
pub use node::*;
pub use syntax_kind::{KindCategory, SyntaxKind};
pub use types::*;
