//! semaq - semantic-analysis core for structured-query compiler front
//! ends.
//!
//! An external binder, while walking a parse tree, builds bound expression
//! and predicate nodes ([`tree`]), registers aliases scope by scope
//! ([`scope`]), and consults the type-compatibility rules
//! ([`types::compat`]). The finished tree is handed to a downstream
//! [`TreeVisitor`] for translation or further checking. Parsing, domain
//! metadata, and translation all live outside this crate.

pub mod error;
pub mod scope;
pub mod tree;
pub mod types;

pub use error::{Result, SemaqError};
pub use scope::{AliasCollisionError, AliasScopes, FromElement, ScopeId, Selection};
pub use tree::{Expression, LiteralValue, Predicate, TreeVisitor};
pub use types::{DomainType, PrimitiveKind, TypeRef};
