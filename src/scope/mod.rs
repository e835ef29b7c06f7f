//! Scoped alias registration and lookup.
//!
//! One alias registry per query or subquery scope, held in an arena for
//! the duration of a binding pass:
//! - From-clause and select-clause value objects ([`FromElement`],
//!   [`Selection`])
//! - The registry arena with parent-chained visibility ([`AliasScopes`])
//! - Structured collision errors ([`AliasCollisionError`])

mod elements;
mod registry;

pub use elements::{FromElement, Selection};
pub use registry::{AliasCollisionError, AliasScopes, ScopeId};
