//! The attribute envelope shared by every operation.

use optree_core::{ConstantValue, SemanticModel, Type};

/// Attributes carried by every operation regardless of its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OperationData<'db, S> {
    semantic_model: SemanticModel,
    syntax: S,
    ty: Option<Type<'db>>,
    constant_value: Option<ConstantValue>,
    is_implicit: bool,
}

impl<'db, S> OperationData<'db, S> {
    pub(crate) fn new(
        semantic_model: SemanticModel,
        syntax: S,
        ty: Option<Type<'db>>,
        constant_value: Option<ConstantValue>,
        is_implicit: bool,
    ) -> Self {
        Self {
            semantic_model,
            syntax,
            ty,
            constant_value,
            is_implicit,
        }
    }

    /// Envelope for an operation that has no value of its own.
    pub(crate) fn valueless(semantic_model: SemanticModel, syntax: S, is_implicit: bool) -> Self {
        Self::new(semantic_model, syntax, None, None, is_implicit)
    }

    /// The session the operation was bound in.
    pub fn semantic_model(&self) -> SemanticModel {
        self.semantic_model
    }

    /// The syntax the operation was bound from.
    pub fn syntax(&self) -> &S {
        &self.syntax
    }

    /// Result type; `None` when the operation produces no value.
    pub fn ty(&self) -> Option<Type<'db>> {
        self.ty
    }

    /// Compile-time constant value, if the operation has one.
    pub fn constant_value(&self) -> Option<&ConstantValue> {
        self.constant_value.as_ref()
    }

    /// Whether the compiler synthesized this operation.
    pub fn is_implicit(&self) -> bool {
        self.is_implicit
    }
}
