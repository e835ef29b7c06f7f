//! Bound predicate definitions.

use serde::{Deserialize, Serialize};

use crate::tree::expression::Expression;
use crate::tree::visitor::TreeVisitor;

/// Bound predicate after semantic analysis.
///
/// Predicates are structure only; evaluation and short-circuit semantics
/// belong to a later execution stage. Sub-predicates are exclusively owned
/// by their parent and trees are acyclic.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Conjunction of two predicates.
    And(AndPredicate),
    /// Disjunction of two predicates.
    Or(OrPredicate),
    /// Negation of a wrapped predicate.
    Negated(NegatedPredicate),
    /// Relational comparison of two expressions.
    Comparison(ComparisonPredicate),
}

impl Predicate {
    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: TreeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Predicate::And(pred) => visitor.visit_and(pred),
            Predicate::Or(pred) => visitor.visit_or(pred),
            Predicate::Negated(pred) => visitor.visit_negated(pred),
            Predicate::Comparison(pred) => visitor.visit_comparison(pred),
        }
    }

    /// Creates a conjunction.
    #[must_use]
    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And(AndPredicate::new(left, right))
    }

    /// Creates a disjunction.
    #[must_use]
    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or(OrPredicate::new(left, right))
    }

    /// Creates a negation.
    #[must_use]
    pub fn negated(inner: Predicate) -> Self {
        Predicate::Negated(NegatedPredicate::new(inner))
    }

    /// Creates a comparison.
    #[must_use]
    pub fn comparison(left: Expression, op: ComparisonOp, right: Expression) -> Self {
        Predicate::Comparison(ComparisonPredicate::new(left, op, right))
    }
}

/// Pure structural conjunction of two predicates.
#[derive(Debug, Clone)]
pub struct AndPredicate {
    left: Box<Predicate>,
    right: Box<Predicate>,
}

impl AndPredicate {
    /// Creates a conjunction of two predicates.
    #[must_use]
    pub fn new(left: Predicate, right: Predicate) -> Self {
        AndPredicate {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns the left-hand sub-predicate, unchanged from construction.
    #[must_use]
    pub fn left(&self) -> &Predicate {
        &self.left
    }

    /// Returns the right-hand sub-predicate, unchanged from construction.
    #[must_use]
    pub fn right(&self) -> &Predicate {
        &self.right
    }
}

/// Pure structural disjunction of two predicates.
#[derive(Debug, Clone)]
pub struct OrPredicate {
    left: Box<Predicate>,
    right: Box<Predicate>,
}

impl OrPredicate {
    /// Creates a disjunction of two predicates.
    #[must_use]
    pub fn new(left: Predicate, right: Predicate) -> Self {
        OrPredicate {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns the left-hand sub-predicate.
    #[must_use]
    pub fn left(&self) -> &Predicate {
        &self.left
    }

    /// Returns the right-hand sub-predicate.
    #[must_use]
    pub fn right(&self) -> &Predicate {
        &self.right
    }
}

/// Negation of a wrapped predicate.
#[derive(Debug, Clone)]
pub struct NegatedPredicate {
    inner: Box<Predicate>,
}

impl NegatedPredicate {
    /// Creates a negation.
    #[must_use]
    pub fn new(inner: Predicate) -> Self {
        NegatedPredicate {
            inner: Box::new(inner),
        }
    }

    /// Returns the wrapped predicate.
    #[must_use]
    pub fn inner(&self) -> &Predicate {
        &self.inner
    }
}

/// Relational comparison of two expressions.
#[derive(Debug, Clone)]
pub struct ComparisonPredicate {
    left: Expression,
    op: ComparisonOp,
    right: Expression,
}

impl ComparisonPredicate {
    /// Creates a comparison.
    #[must_use]
    pub fn new(left: Expression, op: ComparisonOp, right: Expression) -> Self {
        ComparisonPredicate { left, op, right }
    }

    /// Returns the left-hand expression.
    #[must_use]
    pub fn left(&self) -> &Expression {
        &self.left
    }

    /// Returns the operator.
    #[must_use]
    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    /// Returns the right-hand expression.
    #[must_use]
    pub fn right(&self) -> &Expression {
        &self.right
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// Equal (=).
    Eq,
    /// Not equal (<>).
    Neq,
    /// Less than (<).
    Lt,
    /// Less than or equal (<=).
    Lte,
    /// Greater than (>).
    Gt,
    /// Greater than or equal (>=).
    Gte,
}

impl ComparisonOp {
    /// Returns the string representation of this operator.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Neq => "<>",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
        }
    }
}
