//! `TypeRef` and `PrimitiveKind` definitions.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The primitive kinds recognized by the compatibility engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Boolean.
    Bool,
    /// Single character.
    Char,
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Char,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Returns the name of the primitive form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Returns the name of the boxed counterpart.
    #[must_use]
    pub fn boxed_name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "Boolean",
            PrimitiveKind::Char => "Character",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
        }
    }

    /// Returns whether this kind is in the integral family (short, int,
    /// long). Byte stands outside both numeric families.
    #[must_use]
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long
        )
    }

    /// Returns whether this kind is in the floating-point family (float,
    /// double).
    #[must_use]
    pub fn is_floating(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }
}

/// Domain-model type metadata resolved by an external catalog.
///
/// Implementations live outside this crate. The tree and the compatibility
/// engine only need a display name and the domain-subtype query; everything
/// else about the domain model stays with its owner.
pub trait DomainType: fmt::Debug + Send + Sync {
    /// Display name of the domain type.
    fn name(&self) -> &str;

    /// Returns whether a value of this type may stand in for `target`
    /// (domain subtyping or other structural assignability).
    fn assignable_to(&self, target: &dyn DomainType) -> bool;
}

/// Opaque handle for a data kind: primitive, boxed, or domain-model.
///
/// Cloning is cheap; domain handles share the underlying metadata through
/// an [`Arc`]. Equality is structural for primitive and boxed kinds and
/// identity-based for domain types: two handles are equal only when they
/// point at the same metadata object.
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// A primitive kind.
    Primitive(PrimitiveKind),
    /// The boxed counterpart of a primitive kind.
    Boxed(PrimitiveKind),
    /// A domain-model type resolved by external metadata.
    Domain(Arc<dyn DomainType>),
}

impl TypeRef {
    /// Wraps domain-model metadata in a type handle.
    #[must_use]
    pub fn domain(metadata: Arc<dyn DomainType>) -> Self {
        TypeRef::Domain(metadata)
    }

    /// Returns whether this handle is a primitive kind.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    /// Returns whether this handle is a boxed kind.
    #[must_use]
    pub fn is_boxed(&self) -> bool {
        matches!(self, TypeRef::Boxed(_))
    }

    /// Returns whether this handle is a domain-model type.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, TypeRef::Domain(_))
    }

    /// Returns the display name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Primitive(kind) => kind.name(),
            TypeRef::Boxed(kind) => kind.boxed_name(),
            TypeRef::Domain(metadata) => metadata.name(),
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeRef::Primitive(a), TypeRef::Primitive(b))
            | (TypeRef::Boxed(a), TypeRef::Boxed(b)) => a == b,
            (TypeRef::Domain(a), TypeRef::Domain(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for TypeRef {}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
