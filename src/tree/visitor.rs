//! Double-dispatch traversal over the bound tree.

use crate::tree::expression::{
    AttributeReferenceExpression, BinaryArithmeticExpression, CollectionIndexExpression,
    LiteralExpression, VariableReferenceExpression,
};
use crate::tree::predicate::{
    AndPredicate, ComparisonPredicate, NegatedPredicate, OrPredicate,
};

/// Visitor over the bound expression and predicate tree.
///
/// One method per concrete node variant, parameterized by a caller-chosen
/// [`Output`](TreeVisitor::Output) type;
/// [`Expression::accept`](crate::tree::Expression::accept) and
/// [`Predicate::accept`](crate::tree::Predicate::accept) perform the
/// dispatch. Methods carry no default bodies: a new node variant is a
/// coordinated change to the owning enum and this trait, and every
/// implementation fails to compile until it handles the variant.
pub trait TreeVisitor {
    /// Result type produced for each visited node.
    type Output;

    /// Visit a literal expression.
    fn visit_literal(&mut self, expression: &LiteralExpression) -> Self::Output;

    /// Visit a range-variable reference.
    fn visit_variable_reference(
        &mut self,
        expression: &VariableReferenceExpression,
    ) -> Self::Output;

    /// Visit an attribute reference.
    fn visit_attribute_reference(
        &mut self,
        expression: &AttributeReferenceExpression,
    ) -> Self::Output;

    /// Visit a binary arithmetic expression.
    fn visit_binary_arithmetic(
        &mut self,
        expression: &BinaryArithmeticExpression,
    ) -> Self::Output;

    /// Visit a collection-index expression.
    fn visit_collection_index(
        &mut self,
        expression: &CollectionIndexExpression,
    ) -> Self::Output;

    /// Visit a conjunction.
    fn visit_and(&mut self, predicate: &AndPredicate) -> Self::Output;

    /// Visit a disjunction.
    fn visit_or(&mut self, predicate: &OrPredicate) -> Self::Output;

    /// Visit a negation.
    fn visit_negated(&mut self, predicate: &NegatedPredicate) -> Self::Output;

    /// Visit a comparison.
    fn visit_comparison(&mut self, predicate: &ComparisonPredicate) -> Self::Output;
}
