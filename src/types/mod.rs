//! Type handles for the bound query tree.
//!
//! This module provides the type model the rest of the crate works
//! against:
//! - Opaque type handles ([`TypeRef`]) over primitive, boxed, and
//!   domain-model kinds
//! - The seam to external domain metadata ([`DomainType`])
//! - Assignment-compatibility rules ([`compat`])

mod handle;

pub mod compat;

pub use handle::{DomainType, PrimitiveKind, TypeRef};
