//! tsprec_core: Core utilities shared by the syntax-kind taxonomy and the
//! precedence engine.
//!
//! Syntax trees handed to the engine are borrowed from an arena owned by the
//! caller; this crate provides that arena.

pub mod arena;

pub use arena::NodeArena;
