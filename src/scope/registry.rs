//! Alias registries with parent-chained scope visibility.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::scope::elements::{FromElement, Selection};
use crate::types::compat;
use crate::types::TypeRef;

/// Handle addressing one scope inside an [`AliasScopes`] arena.
///
/// Handles are only meaningful for the arena that issued them; presenting
/// one to a different arena is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

/// Alias registry for a single query or subquery scope.
#[derive(Debug)]
struct ScopeFrame {
    /// Alias -> range variable, local to this scope.
    from_elements: HashMap<String, FromElement>,
    /// Alias -> selection, local to this scope.
    selections: HashMap<String, Selection>,
    /// Enclosing scope, absent for the outermost one.
    parent: Option<ScopeId>,
}

/// Arena of per-scope alias registries for one in-progress binding pass.
///
/// The binder pushes a scope when it enters a query or subquery block and
/// addresses it through the returned [`ScopeId`]; frames hold a parent
/// index rather than a reference, so scope lifetime stays explicit and the
/// whole arena drops with the pass. One arena serves one single-threaded
/// pass; concurrent passes use independent arenas. A scope in which a
/// collision was reported is poisoned; further registrations against it
/// are not well-defined.
#[derive(Debug, Default)]
pub struct AliasScopes {
    frames: Vec<ScopeFrame>,
}

impl AliasScopes {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        AliasScopes { frames: Vec::new() }
    }

    /// Opens an outermost scope.
    #[must_use]
    pub fn push_root(&mut self) -> ScopeId {
        self.push_frame(None)
    }

    /// Opens a scope nested in `parent`.
    ///
    /// # Panics
    ///
    /// Panics when `parent` was not issued by this arena.
    #[must_use]
    pub fn push_child(&mut self, parent: ScopeId) -> ScopeId {
        self.check_handle(parent);
        self.push_frame(Some(parent))
    }

    /// Returns the parent of `scope`, absent for an outermost scope.
    ///
    /// # Panics
    ///
    /// Panics when `scope` was not issued by this arena.
    #[must_use]
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.frame(scope).parent
    }

    /// Registers a range variable in `scope`.
    ///
    /// Collision is checked only against the local scope, never against
    /// ancestors; a child scope may reuse an alias already used by an
    /// ancestor (intentional shadowing).
    ///
    /// # Errors
    ///
    /// Returns [`AliasCollisionError::FromElementReuse`] when the alias is
    /// already bound to a range variable in this scope.
    ///
    /// # Panics
    ///
    /// Panics when `scope` was not issued by this arena.
    pub fn register_from_element(&mut self, scope: ScopeId, element: FromElement) -> Result<()> {
        let frame = self.frame_mut(scope);
        if let Some(existing) = frame.from_elements.get(element.alias()) {
            return Err(AliasCollisionError::FromElementReuse {
                alias: element.alias().to_string(),
                existing: existing.bound_type().clone(),
                incoming: element.bound_type().clone(),
            }
            .into());
        }
        frame
            .from_elements
            .insert(element.alias().to_string(), element);
        Ok(())
    }

    /// Registers a selection in `scope`. No-op when the selection carries
    /// no alias.
    ///
    /// A selection alias may coincide with a range-variable alias in the
    /// same scope only when the selection's expression type is
    /// assignment-compatible with the range variable's bound type; the
    /// range variable's type is the assignment target.
    ///
    /// # Errors
    ///
    /// Returns [`AliasCollisionError::SelectionReuse`] when the alias is
    /// already used by another selection in this scope, or
    /// [`AliasCollisionError::IncompatibleSharedAlias`] when it matches a
    /// same-scope range variable of an incompatible type.
    ///
    /// # Panics
    ///
    /// Panics when `scope` was not issued by this arena.
    pub fn register_selection(&mut self, scope: ScopeId, selection: Selection) -> Result<()> {
        let Some(alias) = selection.alias() else {
            return Ok(());
        };
        let alias = alias.to_string();

        let frame = self.frame_mut(scope);
        if frame.selections.contains_key(&alias) {
            return Err(AliasCollisionError::SelectionReuse { alias }.into());
        }
        if let Some(element) = frame.from_elements.get(&alias) {
            let selection_type = selection.expression().expression_type();
            if !compat::are_assignment_compatible(element.bound_type(), selection_type) {
                return Err(AliasCollisionError::IncompatibleSharedAlias {
                    alias,
                    selection_type: selection_type.clone(),
                    element_type: element.bound_type().clone(),
                }
                .into());
            }
        }
        frame.selections.insert(alias, selection);
        Ok(())
    }

    /// Looks up a range variable by alias, walking the parent chain
    /// outward on a local miss. Returns `None` once the chain is
    /// exhausted.
    ///
    /// # Panics
    ///
    /// Panics when `scope` was not issued by this arena.
    #[must_use]
    pub fn find_from_element(&self, scope: ScopeId, alias: &str) -> Option<&FromElement> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = self.frame(id);
            if let Some(element) = frame.from_elements.get(alias) {
                return Some(element);
            }
            current = frame.parent;
        }
        None
    }

    /// Looks up a selection by alias in `scope` only; selections are never
    /// visible to nested subqueries, so the parent chain is not consulted.
    ///
    /// # Panics
    ///
    /// Panics when `scope` was not issued by this arena.
    #[must_use]
    pub fn find_selection(&self, scope: ScopeId, alias: &str) -> Option<&Selection> {
        self.frame(scope).selections.get(alias)
    }

    fn push_frame(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.frames.len());
        self.frames.push(ScopeFrame {
            from_elements: HashMap::new(),
            selections: HashMap::new(),
            parent,
        });
        id
    }

    fn check_handle(&self, scope: ScopeId) {
        assert!(
            scope.0 < self.frames.len(),
            "scope handle {scope:?} was not issued by this arena"
        );
    }

    fn frame(&self, scope: ScopeId) -> &ScopeFrame {
        self.check_handle(scope);
        &self.frames[scope.0]
    }

    fn frame_mut(&mut self, scope: ScopeId) -> &mut ScopeFrame {
        self.check_handle(scope);
        &mut self.frames[scope.0]
    }
}

/// An alias was reused illegally within one scope.
#[derive(Debug, Clone)]
pub enum AliasCollisionError {
    /// Two range variables registered under one alias in the same scope.
    FromElementReuse {
        /// The offending alias.
        alias: String,
        /// Bound type of the range variable already registered.
        existing: TypeRef,
        /// Bound type of the range variable being registered.
        incoming: TypeRef,
    },
    /// Two selections registered under one alias in the same scope.
    SelectionReuse {
        /// The offending alias.
        alias: String,
    },
    /// A selection alias matched a same-scope range-variable alias with an
    /// assignment-incompatible type.
    IncompatibleSharedAlias {
        /// The offending alias.
        alias: String,
        /// Expression type of the selection being registered.
        selection_type: TypeRef,
        /// Bound type of the range variable already holding the alias.
        element_type: TypeRef,
    },
}

impl AliasCollisionError {
    /// Returns the offending alias.
    #[must_use]
    pub fn alias(&self) -> &str {
        match self {
            AliasCollisionError::FromElementReuse { alias, .. }
            | AliasCollisionError::SelectionReuse { alias }
            | AliasCollisionError::IncompatibleSharedAlias { alias, .. } => alias,
        }
    }
}

impl fmt::Display for AliasCollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasCollisionError::FromElementReuse {
                alias,
                existing,
                incoming,
            } => write!(
                f,
                "Alias [{alias}] used for multiple from-clause elements: {existing}, {incoming}"
            ),
            AliasCollisionError::SelectionReuse { alias } => {
                write!(f, "Alias [{alias}] is already used in the same select clause")
            }
            AliasCollisionError::IncompatibleSharedAlias {
                alias,
                selection_type,
                element_type,
            } => write!(
                f,
                "Alias [{alias}] used in the select clause for {selection_type} is also used by a from element bound to {element_type}"
            ),
        }
    }
}

impl std::error::Error for AliasCollisionError {}
