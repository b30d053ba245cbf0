//! Operator kinds.

use serde::{Deserialize, Serialize};

/// Binary operators, as resolved by the binder.
///
/// The same kind is used for the operator of a compound assignment
/// (`x += 1` carries `Add`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum BinaryOperatorKind {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    IntegerDivide,
    Remainder,
    Power,

    // Shifts
    LeftShift,
    RightShift,

    // Bitwise / logical
    And,
    Or,
    ExclusiveOr,
    ConditionalAnd,
    ConditionalOr,

    // String
    Concatenate,

    // Comparison
    Equals,
    ObjectValueEquals,
    NotEquals,
    ObjectValueNotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    GreaterThan,
    Like,
}

impl BinaryOperatorKind {
    /// Source token the operator is usually spelled with.
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperatorKind::Add => "+",
            BinaryOperatorKind::Subtract => "-",
            BinaryOperatorKind::Multiply => "*",
            BinaryOperatorKind::Divide => "/",
            BinaryOperatorKind::IntegerDivide => "\\",
            BinaryOperatorKind::Remainder => "%",
            BinaryOperatorKind::Power => "^",
            BinaryOperatorKind::LeftShift => "<<",
            BinaryOperatorKind::RightShift => ">>",
            BinaryOperatorKind::And => "&",
            BinaryOperatorKind::Or => "|",
            BinaryOperatorKind::ExclusiveOr => "xor",
            BinaryOperatorKind::ConditionalAnd => "&&",
            BinaryOperatorKind::ConditionalOr => "||",
            BinaryOperatorKind::Concatenate => "&",
            BinaryOperatorKind::Equals => "==",
            BinaryOperatorKind::ObjectValueEquals => "Is",
            BinaryOperatorKind::NotEquals => "!=",
            BinaryOperatorKind::ObjectValueNotEquals => "IsNot",
            BinaryOperatorKind::LessThan => "<",
            BinaryOperatorKind::LessThanOrEqual => "<=",
            BinaryOperatorKind::GreaterThanOrEqual => ">=",
            BinaryOperatorKind::GreaterThan => ">",
            BinaryOperatorKind::Like => "Like",
        }
    }

    /// Whether the operator produces a truth value from comparing its operands.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperatorKind::Equals
                | BinaryOperatorKind::ObjectValueEquals
                | BinaryOperatorKind::NotEquals
                | BinaryOperatorKind::ObjectValueNotEquals
                | BinaryOperatorKind::LessThan
                | BinaryOperatorKind::LessThanOrEqual
                | BinaryOperatorKind::GreaterThanOrEqual
                | BinaryOperatorKind::GreaterThan
                | BinaryOperatorKind::Like
        )
    }

    /// Whether the right operand is evaluated only when the left does not decide the result.
    pub fn is_short_circuit(self) -> bool {
        matches!(
            self,
            BinaryOperatorKind::ConditionalAnd | BinaryOperatorKind::ConditionalOr
        )
    }
}
