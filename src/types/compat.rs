//! Assignment-compatibility rules over type handles.
//!
//! Decides whether a value of one type may stand in for another, covering
//! domain subtyping (delegated to [`DomainType`](super::DomainType)
//! metadata) and the primitive/boxed numeric lattice. Everything here is
//! pure classification over [`TypeRef`] handles; no state, no allocation.

use super::{PrimitiveKind, TypeRef};

/// Every primitive kind paired with its boxed counterpart, in declaration
/// order. The pairing is fixed at compile time and safe for unsynchronized
/// concurrent reads; consumers enumerating the association iterate this
/// table.
pub static PRIMITIVE_BOXED_PAIRS: [(TypeRef, TypeRef); 8] = [
    (
        TypeRef::Primitive(PrimitiveKind::Bool),
        TypeRef::Boxed(PrimitiveKind::Bool),
    ),
    (
        TypeRef::Primitive(PrimitiveKind::Char),
        TypeRef::Boxed(PrimitiveKind::Char),
    ),
    (
        TypeRef::Primitive(PrimitiveKind::Byte),
        TypeRef::Boxed(PrimitiveKind::Byte),
    ),
    (
        TypeRef::Primitive(PrimitiveKind::Short),
        TypeRef::Boxed(PrimitiveKind::Short),
    ),
    (
        TypeRef::Primitive(PrimitiveKind::Int),
        TypeRef::Boxed(PrimitiveKind::Int),
    ),
    (
        TypeRef::Primitive(PrimitiveKind::Long),
        TypeRef::Boxed(PrimitiveKind::Long),
    ),
    (
        TypeRef::Primitive(PrimitiveKind::Float),
        TypeRef::Boxed(PrimitiveKind::Float),
    ),
    (
        TypeRef::Primitive(PrimitiveKind::Double),
        TypeRef::Boxed(PrimitiveKind::Double),
    ),
];

/// Returns whether `ty` is the boxed counterpart of a primitive kind.
#[must_use]
pub fn is_wrapper(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Boxed(_))
}

/// Returns the primitive form of a boxed type.
///
/// # Panics
///
/// Panics when `ty` is not a boxed type; calling this on anything else is
/// a bug in the calling binder, not a malformed query.
#[must_use]
pub fn unboxed(ty: &TypeRef) -> TypeRef {
    match ty {
        TypeRef::Boxed(kind) => TypeRef::Primitive(*kind),
        other => panic!("unboxed() requires a boxed type, got {other}"),
    }
}

/// Returns the boxed counterpart of a primitive type.
///
/// # Panics
///
/// Panics when `ty` is not a primitive type; calling this on anything else
/// is a bug in the calling binder, not a malformed query.
#[must_use]
pub fn boxed(ty: &TypeRef) -> TypeRef {
    match ty {
        TypeRef::Primitive(kind) => TypeRef::Boxed(*kind),
        other => panic!("boxed() requires a primitive type, got {other}"),
    }
}

/// Decides whether a value of type `from` may stand in for type `to`.
///
/// Identical handles are always compatible. Domain types delegate to the
/// external metadata's subtype query. Primitive and boxed operands reduce
/// to their primitive forms first, then the numeric lattice applies:
/// boolean, char, and byte targets accept only themselves, while any
/// numeric target (short, int, long, float, double) accepts byte and both
/// numeric families. Floating sources are accepted by integral targets;
/// precision loss is tolerated at this layer and policed, if at all, by a
/// later stage.
#[must_use]
pub fn are_assignment_compatible(to: &TypeRef, from: &TypeRef) -> bool {
    if to == from {
        return true;
    }

    if let (TypeRef::Domain(target), TypeRef::Domain(source)) = (to, from) {
        return source.assignable_to(target.as_ref());
    }

    match (primitive_form(to), primitive_form(from)) {
        (Some(target), Some(source)) => primitives_compatible(target, source),
        _ => false,
    }
}

/// Returns whether `ty` is the primitive or boxed form of an integral kind
/// (short, int, long).
#[must_use]
pub fn is_integral_type(ty: &TypeRef) -> bool {
    primitive_form(ty).is_some_and(PrimitiveKind::is_integral)
}

/// Returns whether `ty` is the primitive or boxed form of a floating-point
/// kind (float, double).
#[must_use]
pub fn is_floating_type(ty: &TypeRef) -> bool {
    primitive_form(ty).is_some_and(PrimitiveKind::is_floating)
}

/// Reduces a handle to its primitive kind; domain types have none.
fn primitive_form(ty: &TypeRef) -> Option<PrimitiveKind> {
    match ty {
        TypeRef::Primitive(kind) | TypeRef::Boxed(kind) => Some(*kind),
        TypeRef::Domain(_) => None,
    }
}

fn primitives_compatible(to: PrimitiveKind, from: PrimitiveKind) -> bool {
    match to {
        PrimitiveKind::Bool => from == PrimitiveKind::Bool,
        PrimitiveKind::Char => from == PrimitiveKind::Char,
        PrimitiveKind::Byte => from == PrimitiveKind::Byte,
        // Integral and floating targets accept the same numeric sources;
        // floating -> integral narrows, which this layer tolerates.
        PrimitiveKind::Short
        | PrimitiveKind::Int
        | PrimitiveKind::Long
        | PrimitiveKind::Float
        | PrimitiveKind::Double => {
            from == PrimitiveKind::Byte || from.is_integral() || from.is_floating()
        }
    }
}
