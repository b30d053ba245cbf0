//! Typed, immutable semantic operation trees.
//!
//! This crate bundles the collaborator vocabulary ([`core`]) with the node
//! model and factory ([`operations`]). Most users only need the prelude.

pub use optree_core as core;
pub use optree_operations as operations;

pub mod prelude {
    pub use optree_core::{
        ConstantValue, EqualsValueShape, LocalSymbol, MethodSymbol, SemanticModel, Span, Symbol,
        SyntaxNode, SyntaxShape, Type, TypeKind,
    };
    pub use optree_operations::factory::*;
    pub use optree_operations::{
        BinaryOperatorKind, DeclaredLocals, Operation, OperationKind, print_operation,
    };
}
