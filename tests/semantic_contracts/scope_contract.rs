//! Contract tests for the alias registry.
//!
//! These tests verify the scoping contracts:
//! - From-element aliases are unique per scope, shadowable across scopes
//! - From-element lookup walks the parent chain, selection lookup does not
//! - A selection may share a from-element's alias only under assignment
//!   compatibility

use semaq::{
    AliasCollisionError, AliasScopes, Expression, FromElement, LiteralValue, PrimitiveKind,
    Selection, SemaqError, TypeRef,
};

use super::EntityType;

fn collision(result: semaq::Result<()>) -> AliasCollisionError {
    match result {
        Err(SemaqError::AliasCollision(err)) => err,
        other => panic!("Expected an alias collision, got {other:?}"),
    }
}

#[test]
fn test_duplicate_from_element_alias_rejected() {
    // Contract: two from-elements under one alias in the same scope fail
    let order = EntityType::new("Order");
    let customer = EntityType::new("Customer");

    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();

    scopes
        .register_from_element(root, FromElement::new("o".to_string(), order.type_ref()))
        .unwrap();
    let result =
        scopes.register_from_element(root, FromElement::new("o".to_string(), customer.type_ref()));

    let err = collision(result);
    assert_eq!(err.alias(), "o");
    assert!(err.to_string().contains("multiple from-clause elements"));
}

#[test]
fn test_child_scope_may_shadow_ancestor_alias() {
    // Contract: collision is checked against the local scope only
    let order = EntityType::new("Order");
    let customer = EntityType::new("Customer");

    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();
    let child = scopes.push_child(root);

    scopes
        .register_from_element(root, FromElement::new("o".to_string(), order.type_ref()))
        .unwrap();
    scopes
        .register_from_element(child, FromElement::new("o".to_string(), customer.type_ref()))
        .unwrap();

    // Each scope resolves to its own binding
    let local = scopes.find_from_element(child, "o").unwrap();
    assert_eq!(local.bound_type(), &customer.type_ref());
    let outer = scopes.find_from_element(root, "o").unwrap();
    assert_eq!(outer.bound_type(), &order.type_ref());
}

#[test]
fn test_from_element_lookup_walks_parent_chain() {
    // Contract: local scope first, then parents outward, None when exhausted
    let order = EntityType::new("Order");

    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();
    let child = scopes.push_child(root);
    let grandchild = scopes.push_child(child);

    scopes
        .register_from_element(root, FromElement::new("o".to_string(), order.type_ref()))
        .unwrap();

    let found = scopes.find_from_element(grandchild, "o");
    assert!(found.is_some(), "Lookup should reach the outermost scope");

    assert!(scopes.find_from_element(grandchild, "missing").is_none());
}

#[test]
fn test_selection_lookup_is_scope_local() {
    // Contract: selections are never visible to nested subqueries
    let order = EntityType::new("Order");

    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();
    let child = scopes.push_child(root);

    let projection = Expression::literal(
        LiteralValue::Int(1),
        TypeRef::Primitive(PrimitiveKind::Int),
    );
    scopes
        .register_selection(root, Selection::aliased(projection, "total".to_string()))
        .unwrap();
    scopes
        .register_from_element(root, FromElement::new("o".to_string(), order.type_ref()))
        .unwrap();

    assert!(scopes.find_selection(root, "total").is_some());
    assert!(
        scopes.find_selection(child, "total").is_none(),
        "Selection lookup must not consult the parent chain"
    );
    assert!(
        scopes.find_selection(root, "o").is_none(),
        "From-element aliases are not selection aliases"
    );
}

#[test]
fn test_unaliased_selection_is_a_no_op() {
    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();

    let projection = Expression::literal(
        LiteralValue::Int(1),
        TypeRef::Primitive(PrimitiveKind::Int),
    );
    scopes
        .register_selection(root, Selection::new(projection.clone()))
        .unwrap();
    scopes
        .register_selection(root, Selection::new(projection))
        .unwrap();
}

#[test]
fn test_duplicate_selection_alias_rejected() {
    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();

    let int_ty = TypeRef::Primitive(PrimitiveKind::Int);
    scopes
        .register_selection(
            root,
            Selection::aliased(
                Expression::literal(LiteralValue::Int(1), int_ty.clone()),
                "total".to_string(),
            ),
        )
        .unwrap();
    let result = scopes.register_selection(
        root,
        Selection::aliased(
            Expression::literal(LiteralValue::Int(2), int_ty),
            "total".to_string(),
        ),
    );

    let err = collision(result);
    assert_eq!(err.alias(), "total");
    assert!(err.to_string().contains("same select clause"));
}

#[test]
fn test_incompatible_selection_from_element_alias_rejected() {
    // Contract: a selection may share a from-element alias in the same
    // scope only when the types are assignment-compatible; the error names
    // the alias and both types
    let order = EntityType::new("Order");
    let summary = EntityType::new("OrderSummary");

    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();

    scopes
        .register_from_element(root, FromElement::new("o".to_string(), order.type_ref()))
        .unwrap();
    let projection = Expression::variable_reference("s".to_string(), summary.type_ref());
    let result = scopes.register_selection(root, Selection::aliased(projection, "o".to_string()));

    let err = collision(result);
    assert_eq!(err.alias(), "o");
    let message = err.to_string();
    assert!(message.contains("Order"), "message: {message}");
    assert!(message.contains("OrderSummary"), "message: {message}");
}

#[test]
fn test_compatible_selection_from_element_alias_coexists() {
    // A selection projecting a subtype may share the alias of a from
    // element bound to the supertype
    let person = EntityType::new("Person");
    let employee = EntityType::subtype_of("Employee", &person);

    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();

    scopes
        .register_from_element(root, FromElement::new("p".to_string(), person.type_ref()))
        .unwrap();
    let projection = Expression::variable_reference("e".to_string(), employee.type_ref());
    scopes
        .register_selection(root, Selection::aliased(projection, "p".to_string()))
        .unwrap();

    assert!(scopes.find_selection(root, "p").is_some());
    assert!(scopes.find_from_element(root, "p").is_some());
}

#[test]
fn test_selection_aliases_do_not_collide_across_scopes() {
    // Selections are scope-private, so sibling and nested scopes may reuse
    // a selection alias freely
    let mut scopes = AliasScopes::new();
    let root = scopes.push_root();
    let child = scopes.push_child(root);

    let int_ty = TypeRef::Primitive(PrimitiveKind::Int);
    scopes
        .register_selection(
            root,
            Selection::aliased(
                Expression::literal(LiteralValue::Int(1), int_ty.clone()),
                "total".to_string(),
            ),
        )
        .unwrap();
    scopes
        .register_selection(
            child,
            Selection::aliased(
                Expression::literal(LiteralValue::Int(2), int_ty),
                "total".to_string(),
            ),
        )
        .unwrap();
}
