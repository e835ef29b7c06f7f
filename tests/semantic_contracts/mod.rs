//! Contract tests for the semantic-analysis components.

mod scope_contract;

use std::sync::Arc;

use semaq::{DomainType, TypeRef};

/// Minimal domain-type fixture with single-supertype subtyping, keyed by
/// name as a stand-in for real catalog metadata.
#[derive(Debug)]
pub struct EntityType {
    name: String,
    supertype: Option<Arc<EntityType>>,
}

impl EntityType {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(EntityType {
            name: name.to_string(),
            supertype: None,
        })
    }

    pub fn subtype_of(name: &str, supertype: &Arc<EntityType>) -> Arc<Self> {
        Arc::new(EntityType {
            name: name.to_string(),
            supertype: Some(Arc::clone(supertype)),
        })
    }

    pub fn type_ref(self: &Arc<Self>) -> TypeRef {
        TypeRef::domain(Arc::clone(self) as Arc<dyn DomainType>)
    }
}

impl DomainType for EntityType {
    fn name(&self) -> &str {
        &self.name
    }

    fn assignable_to(&self, target: &dyn DomainType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty.name == target.name() {
                return true;
            }
            current = ty.supertype.as_deref();
        }
        false
    }
}
