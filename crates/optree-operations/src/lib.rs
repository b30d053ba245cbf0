//! Semantic operation trees.
//!
//! The binder resolves syntax into facts (symbols, types, constants) and
//! hands them to [`factory`], which assembles immutable [`Operation`] nodes.
//! Analyzers and IDE tooling then walk those nodes without caring which
//! syntax produced them.
//!
//! ```ignore
//! let int = Type::int32(db);
//! let one = create_literal_expression(1, Some(int), model, one_syntax, false);
//! let two = create_literal_expression(2, Some(int), model, two_syntax, false);
//! let sum = create_binary_operator_expression(
//!     BinaryOperatorKind::Add, one, two, Some(int), model, syntax,
//!     false, false, false, false,
//! );
//! assert!(sum.constant_value().is_none());
//! ```

pub mod error;
pub mod factory;
pub mod operation;
pub mod pretty;

pub use error::EmptyDeclarationError;
pub use factory::*;
pub use operation::{
    BinaryOperatorExpression, BinaryOperatorKind, CompoundAssignmentExpression,
    ConditionalExpression, DeclaredLocals, Descendants, ExpressionStatement, InvalidExpression,
    LiteralExpression, LocalInitializer, Operation, OperationData, OperationKind,
    SimpleAssignmentExpression, VariableDeclaration,
};
pub use pretty::print_operation;

