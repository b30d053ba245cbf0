//! The operation node model.
//!
//! An [`Operation`] is one of a closed set of variants. Every variant carries
//! the same [`OperationData`] envelope (syntax anchor, semantic model, result
//! type, constant value, implicit flag) plus its own payload. Nodes are
//! immutable and exclusively own their sub-operations; syntax anchors and the
//! semantic model are shared handles that the tree never mutates.
//!
//! Consumers discriminate variants by matching on [`Operation`] or
//! [`OperationKind`]. Nodes are built only by [`crate::factory`].

mod data;
mod nodes;
mod operator;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use optree_core::{ConstantValue, SemanticModel, Type};

pub use data::OperationData;
pub use nodes::{
    BinaryOperatorExpression, CompoundAssignmentExpression, ConditionalExpression, DeclaredLocals,
    ExpressionStatement, InvalidExpression, LiteralExpression, LocalInitializer,
    SimpleAssignmentExpression, VariableDeclaration,
};
pub use operator::BinaryOperatorKind;

/// Tag naming each operation variant.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum OperationKind {
    VariableDeclaration,
    LocalInitializer,
    ConditionalExpression,
    ExpressionStatement,
    SimpleAssignmentExpression,
    CompoundAssignmentExpression,
    LiteralExpression,
    BinaryOperatorExpression,
    InvalidExpression,
}

/// Declares [`Operation`] together with its per-variant plumbing.
macro_rules! operations {
    ($($variant:ident => $as_fn:ident),* $(,)?) => {
        /// A node of the semantic operation tree.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Operation<'db, S> {
            $($variant($variant<'db, S>),)*
        }

        impl<'db, S> Operation<'db, S> {
            /// Which variant this is.
            pub fn kind(&self) -> OperationKind {
                match self {
                    $(Operation::$variant(_) => OperationKind::$variant,)*
                }
            }

            /// The shared attribute envelope.
            pub fn data(&self) -> &OperationData<'db, S> {
                match self {
                    $(Operation::$variant(node) => &node.data,)*
                }
            }

            $(
                #[doc = concat!("The payload, if this is a `", stringify!($variant), "`.")]
                pub fn $as_fn(&self) -> Option<&$variant<'db, S>> {
                    match self {
                        Operation::$variant(node) => Some(node),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            )*
        }
    };
}

operations! {
    VariableDeclaration => as_variable_declaration,
    LocalInitializer => as_local_initializer,
    ConditionalExpression => as_conditional_expression,
    ExpressionStatement => as_expression_statement,
    SimpleAssignmentExpression => as_simple_assignment_expression,
    CompoundAssignmentExpression => as_compound_assignment_expression,
    LiteralExpression => as_literal_expression,
    BinaryOperatorExpression => as_binary_operator_expression,
    InvalidExpression => as_invalid_expression,
}

impl<'db, S> Operation<'db, S> {
    pub fn semantic_model(&self) -> SemanticModel {
        self.data().semantic_model()
    }

    pub fn syntax(&self) -> &S {
        self.data().syntax()
    }

    pub fn ty(&self) -> Option<Type<'db>> {
        self.data().ty()
    }

    pub fn constant_value(&self) -> Option<&ConstantValue> {
        self.data().constant_value()
    }

    pub fn is_implicit(&self) -> bool {
        self.data().is_implicit()
    }

    /// Direct sub-operations, in source order.
    pub fn children(&self) -> SmallVec<[&Operation<'db, S>; 3]> {
        match self {
            Operation::VariableDeclaration(node) => node.initializer().into_iter().collect(),
            Operation::LocalInitializer(node) => smallvec![node.value()],
            Operation::ConditionalExpression(node) => {
                smallvec![node.condition(), node.when_true(), node.when_false()]
            }
            Operation::ExpressionStatement(node) => smallvec![node.expression()],
            Operation::SimpleAssignmentExpression(node) => smallvec![node.target(), node.value()],
            Operation::CompoundAssignmentExpression(node) => {
                smallvec![node.target(), node.value()]
            }
            Operation::LiteralExpression(_) => SmallVec::new(),
            Operation::BinaryOperatorExpression(node) => smallvec![node.left(), node.right()],
            Operation::InvalidExpression(node) => node.children().iter().collect(),
        }
    }

    /// Every operation below this one, in pre-order. `self` is not included.
    pub fn descendants(&self) -> Descendants<'_, 'db, S> {
        let mut stack = Vec::new();
        stack.extend(self.children().into_iter().rev());
        Descendants { stack }
    }
}

/// Pre-order iterator returned by [`Operation::descendants`].
pub struct Descendants<'a, 'db, S> {
    stack: Vec<&'a Operation<'db, S>>,
}

impl<'a, 'db, S> Iterator for Descendants<'a, 'db, S> {
    type Item = &'a Operation<'db, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children().into_iter().rev());
        Some(next)
    }
}
