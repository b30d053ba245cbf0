//! Vocabulary shared between the binder and operation trees.
//!
//! Everything in this crate is supplied by collaborators of the operation
//! layer: syntax anchors come from the parser, types, symbols and constants
//! from the binder. Operation nodes only ever hold these by id or by handle.

pub mod constant;
pub mod semantic;
pub mod symbol;
pub mod syntax;
#[cfg(any(test, feature = "testing"))]
#[doc(hidden)]
pub mod testing;

pub use constant::{ConstantValue, Decimal, F32Bits, F64Bits};
pub use semantic::{LocalSymbol, MethodSymbol, SemanticModel, Type, TypeKind};
pub use symbol::Symbol;
pub use syntax::{
    EqualsValueClause, EqualsValueShape, KindShape, NeverShape, Span, SyntaxKindName,
    SyntaxNode, SyntaxShape,
};
