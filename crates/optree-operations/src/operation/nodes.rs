//! Variant payloads.
//!
//! Fields are private to the crate. The only way to obtain one of these is
//! through [`crate::factory`], so every node in circulation was checked there.

use smallvec::SmallVec;

use optree_core::{ConstantValue, LocalSymbol, MethodSymbol};

use super::data::OperationData;
use super::operator::BinaryOperatorKind;
use super::Operation;
use crate::error::EmptyDeclarationError;

/// Ordered, non-empty set of locals introduced by one declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeclaredLocals<'db>(SmallVec<[LocalSymbol<'db>; 1]>);

impl<'db> DeclaredLocals<'db> {
    /// Locals in declaration order.
    pub fn as_slice(&self) -> &[LocalSymbol<'db>] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocalSymbol<'db>> {
        self.0.iter()
    }

    /// The first declared local. Always present.
    pub fn first(&self) -> LocalSymbol<'db> {
        self.0[0]
    }
}

impl<'db> From<LocalSymbol<'db>> for DeclaredLocals<'db> {
    fn from(local: LocalSymbol<'db>) -> Self {
        Self(SmallVec::from_buf([local]))
    }
}

impl<'db> TryFrom<Vec<LocalSymbol<'db>>> for DeclaredLocals<'db> {
    type Error = EmptyDeclarationError;

    fn try_from(locals: Vec<LocalSymbol<'db>>) -> Result<Self, Self::Error> {
        if locals.is_empty() {
            return Err(EmptyDeclarationError);
        }
        Ok(Self(SmallVec::from_vec(locals)))
    }
}

impl<'a, 'db> IntoIterator for &'a DeclaredLocals<'db> {
    type Item = &'a LocalSymbol<'db>;
    type IntoIter = std::slice::Iter<'a, LocalSymbol<'db>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `Dim x, y = value` / `int x = value;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariableDeclaration<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) locals: DeclaredLocals<'db>,
    pub(crate) initializer: Option<Box<Operation<'db, S>>>,
}

impl<'db, S> VariableDeclaration<'db, S> {
    pub fn locals(&self) -> &DeclaredLocals<'db> {
        &self.locals
    }

    /// The [`LocalInitializer`] operation, if the declaration has one.
    pub fn initializer(&self) -> Option<&Operation<'db, S>> {
        self.initializer.as_deref()
    }
}

/// The initial value of a declared local.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalInitializer<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) value: Box<Operation<'db, S>>,
}

impl<'db, S> LocalInitializer<'db, S> {
    pub fn value(&self) -> &Operation<'db, S> {
        &self.value
    }
}

/// `condition ? when_true : when_false`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConditionalExpression<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) condition: Box<Operation<'db, S>>,
    pub(crate) when_true: Box<Operation<'db, S>>,
    pub(crate) when_false: Box<Operation<'db, S>>,
}

impl<'db, S> ConditionalExpression<'db, S> {
    pub fn condition(&self) -> &Operation<'db, S> {
        &self.condition
    }

    pub fn when_true(&self) -> &Operation<'db, S> {
        &self.when_true
    }

    pub fn when_false(&self) -> &Operation<'db, S> {
        &self.when_false
    }
}

/// An expression evaluated for its side effects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExpressionStatement<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) expression: Box<Operation<'db, S>>,
}

impl<'db, S> ExpressionStatement<'db, S> {
    pub fn expression(&self) -> &Operation<'db, S> {
        &self.expression
    }
}

/// `target = value`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SimpleAssignmentExpression<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) target: Box<Operation<'db, S>>,
    pub(crate) value: Box<Operation<'db, S>>,
}

impl<'db, S> SimpleAssignmentExpression<'db, S> {
    pub fn target(&self) -> &Operation<'db, S> {
        &self.target
    }

    pub fn value(&self) -> &Operation<'db, S> {
        &self.value
    }
}

/// `target op= value`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompoundAssignmentExpression<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) operator_kind: BinaryOperatorKind,
    pub(crate) is_lifted: bool,
    pub(crate) is_checked: bool,
    pub(crate) target: Box<Operation<'db, S>>,
    pub(crate) value: Box<Operation<'db, S>>,
    pub(crate) uses_operator_method: bool,
    pub(crate) operator_method: Option<MethodSymbol<'db>>,
}

impl<'db, S> CompoundAssignmentExpression<'db, S> {
    pub fn operator_kind(&self) -> BinaryOperatorKind {
        self.operator_kind
    }

    /// Whether the operator is lifted over nullable operands.
    pub fn is_lifted(&self) -> bool {
        self.is_lifted
    }

    /// Whether overflow is checked.
    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub fn target(&self) -> &Operation<'db, S> {
        &self.target
    }

    pub fn value(&self) -> &Operation<'db, S> {
        &self.value
    }

    /// True exactly when [`Self::operator_method`] is present.
    pub fn uses_operator_method(&self) -> bool {
        self.uses_operator_method
    }

    /// User-defined operator implementation, if one was selected.
    pub fn operator_method(&self) -> Option<MethodSymbol<'db>> {
        self.operator_method
    }
}

/// A literal. Always carries a constant value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralExpression<'db, S> {
    pub(crate) data: OperationData<'db, S>,
}

impl<'db, S> LiteralExpression<'db, S> {
    pub fn value(&self) -> &ConstantValue {
        match self.data.constant_value() {
            Some(value) => value,
            None => unreachable!("literal expression built without a constant value"),
        }
    }
}

/// `left op right`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryOperatorExpression<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) operator_kind: BinaryOperatorKind,
    pub(crate) left: Box<Operation<'db, S>>,
    pub(crate) right: Box<Operation<'db, S>>,
    pub(crate) is_lifted: bool,
    pub(crate) is_checked: bool,
    pub(crate) is_compare_text: bool,
    pub(crate) uses_operator_method: bool,
    pub(crate) operator_method: Option<MethodSymbol<'db>>,
}

impl<'db, S> BinaryOperatorExpression<'db, S> {
    pub fn operator_kind(&self) -> BinaryOperatorKind {
        self.operator_kind
    }

    pub fn left(&self) -> &Operation<'db, S> {
        &self.left
    }

    pub fn right(&self) -> &Operation<'db, S> {
        &self.right
    }

    /// Whether the operator is lifted over nullable operands.
    pub fn is_lifted(&self) -> bool {
        self.is_lifted
    }

    /// Whether overflow is checked.
    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    /// Whether string comparison is textual (case-insensitive) rather than binary.
    pub fn is_compare_text(&self) -> bool {
        self.is_compare_text
    }

    pub fn uses_operator_method(&self) -> bool {
        self.uses_operator_method
    }

    pub fn operator_method(&self) -> Option<MethodSymbol<'db>> {
        self.operator_method
    }
}

/// A construct the binder could not fully resolve.
///
/// Carries whatever sub-operations could still be salvaged, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidExpression<'db, S> {
    pub(crate) data: OperationData<'db, S>,
    pub(crate) children: Vec<Operation<'db, S>>,
}

impl<'db, S> InvalidExpression<'db, S> {
    pub fn children(&self) -> &[Operation<'db, S>] {
        &self.children
    }
}
