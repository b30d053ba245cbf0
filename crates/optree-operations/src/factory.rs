//! Construction of operation nodes.
//!
//! Each function takes facts the binder has already resolved (sub-operations,
//! symbols, types, constants), derives the remaining attributes, and returns a
//! finished, immutable [`Operation`]. None of them fail: inputs are trusted,
//! and a broken caller contract is a binder bug, not a user error.

use optree_core::{
    ConstantValue, MethodSymbol, SemanticModel, SyntaxNode, SyntaxShape, Type,
};

use crate::operation::{
    BinaryOperatorExpression, BinaryOperatorKind, CompoundAssignmentExpression,
    ConditionalExpression, DeclaredLocals, ExpressionStatement, InvalidExpression,
    LiteralExpression, LocalInitializer, Operation, OperationData, SimpleAssignmentExpression,
    VariableDeclaration,
};

/// Build a declaration of one or more locals.
///
/// `Shape` names the syntax production that owns an initial value (the
/// `= value` clause). When the initial value's syntax parent has that shape,
/// the initializer is anchored on the clause; otherwise it is anchored on the
/// value itself. Declarations written by the user are never implicit.
pub fn create_variable_declaration<'db, Shape, S>(
    locals: impl Into<DeclaredLocals<'db>>,
    initial_value: Option<Operation<'db, S>>,
    semantic_model: SemanticModel,
    syntax: S,
) -> Operation<'db, S>
where
    Shape: SyntaxShape<S>,
    S: SyntaxNode,
{
    let locals = locals.into();
    let initializer = create_local_initializer::<Shape, S>(initial_value, semantic_model);
    tracing::trace!(
        locals = locals.as_slice().len(),
        has_initializer = initializer.is_some(),
        "variable declaration"
    );

    Operation::VariableDeclaration(VariableDeclaration {
        data: OperationData::valueless(semantic_model, syntax, false),
        locals,
        initializer: initializer.map(Box::new),
    })
}

/// Wrap an initial value, or produce nothing when there is none.
fn create_local_initializer<'db, Shape, S>(
    initial_value: Option<Operation<'db, S>>,
    semantic_model: SemanticModel,
) -> Option<Operation<'db, S>>
where
    Shape: SyntaxShape<S>,
    S: SyntaxNode,
{
    let value = initial_value?;
    let syntax = initializer_syntax::<Shape, S>(value.syntax());
    let data = OperationData::new(
        semantic_model,
        syntax,
        value.ty(),
        value.constant_value().cloned(),
        value.is_implicit(),
    );

    Some(Operation::LocalInitializer(LocalInitializer {
        data,
        value: Box::new(value),
    }))
}

/// The anchor for an initializer whose value is anchored at `value_syntax`.
fn initializer_syntax<Shape, S>(value_syntax: &S) -> S
where
    Shape: SyntaxShape<S>,
    S: SyntaxNode,
{
    match value_syntax.parent() {
        Some(parent) if Shape::matches(&parent) => {
            tracing::trace!(kind = parent.kind(), "initializer anchored on parent clause");
            parent
        }
        _ => {
            tracing::trace!(kind = value_syntax.kind(), "initializer anchored on value");
            value_syntax.clone()
        }
    }
}

/// Build `condition ? when_true : when_false`. No constant folding happens here.
pub fn create_conditional_expression<'db, S: SyntaxNode>(
    condition: Operation<'db, S>,
    when_true: Operation<'db, S>,
    when_false: Operation<'db, S>,
    result_type: Option<Type<'db>>,
    semantic_model: SemanticModel,
    syntax: S,
    is_implicit: bool,
) -> Operation<'db, S> {
    Operation::ConditionalExpression(ConditionalExpression {
        data: OperationData::new(semantic_model, syntax, result_type, None, is_implicit),
        condition: Box::new(condition),
        when_true: Box::new(when_true),
        when_false: Box::new(when_false),
    })
}

/// Build `target = value` as a statement.
///
/// The assignment expression takes the target's type; the enclosing statement
/// has neither a type nor a constant value.
pub fn create_simple_assignment_statement<'db, S: SyntaxNode>(
    target: Operation<'db, S>,
    value: Operation<'db, S>,
    semantic_model: SemanticModel,
    syntax: S,
    is_implicit: bool,
) -> Operation<'db, S> {
    let expression = Operation::SimpleAssignmentExpression(SimpleAssignmentExpression {
        data: OperationData::new(
            semantic_model,
            syntax.clone(),
            target.ty(),
            None,
            is_implicit,
        ),
        target: Box::new(target),
        value: Box::new(value),
    });

    expression_statement(expression, semantic_model, syntax, is_implicit)
}

/// Build `target op= value` as a statement.
///
/// Whether a user-defined operator is used follows from `operator_method`
/// alone; callers cannot set it separately.
#[allow(clippy::too_many_arguments)]
pub fn create_compound_assignment_statement<'db, S: SyntaxNode>(
    target: Operation<'db, S>,
    value: Operation<'db, S>,
    operator_kind: BinaryOperatorKind,
    is_lifted: bool,
    is_checked: bool,
    operator_method: Option<MethodSymbol<'db>>,
    semantic_model: SemanticModel,
    syntax: S,
    is_implicit: bool,
) -> Operation<'db, S> {
    tracing::trace!(
        operator = %operator_kind,
        uses_operator_method = operator_method.is_some(),
        "compound assignment"
    );

    let expression = Operation::CompoundAssignmentExpression(CompoundAssignmentExpression {
        data: OperationData::new(
            semantic_model,
            syntax.clone(),
            target.ty(),
            None,
            is_implicit,
        ),
        operator_kind,
        is_lifted,
        is_checked,
        target: Box::new(target),
        value: Box::new(value),
        uses_operator_method: operator_method.is_some(),
        operator_method,
    });

    expression_statement(expression, semantic_model, syntax, is_implicit)
}

fn expression_statement<'db, S: SyntaxNode>(
    expression: Operation<'db, S>,
    semantic_model: SemanticModel,
    syntax: S,
    is_implicit: bool,
) -> Operation<'db, S> {
    Operation::ExpressionStatement(ExpressionStatement {
        data: OperationData::valueless(semantic_model, syntax, is_implicit),
        expression: Box::new(expression),
    })
}

/// Build an integral literal; the constant is recorded as an `Int64`.
pub fn create_literal_expression<'db, S: SyntaxNode>(
    value: i64,
    result_type: Option<Type<'db>>,
    semantic_model: SemanticModel,
    syntax: S,
    is_implicit: bool,
) -> Operation<'db, S> {
    create_constant_literal_expression(
        ConstantValue::Int64(value),
        result_type,
        semantic_model,
        syntax,
        is_implicit,
    )
}

/// Build a literal from a constant the binder already folded, keeping its
/// representation (width, decimal scale, null).
pub fn create_constant_literal_expression<'db, S: SyntaxNode>(
    value: ConstantValue,
    result_type: Option<Type<'db>>,
    semantic_model: SemanticModel,
    syntax: S,
    is_implicit: bool,
) -> Operation<'db, S> {
    Operation::LiteralExpression(LiteralExpression {
        data: OperationData::new(
            semantic_model,
            syntax,
            result_type,
            Some(value),
            is_implicit,
        ),
    })
}

/// Build `left op right` for a built-in operator.
///
/// This entry point never records a user-defined operator method, and never
/// carries a constant value: folding happens before the binder gets here.
#[allow(clippy::too_many_arguments)]
pub fn create_binary_operator_expression<'db, S: SyntaxNode>(
    operator_kind: BinaryOperatorKind,
    left: Operation<'db, S>,
    right: Operation<'db, S>,
    result_type: Option<Type<'db>>,
    semantic_model: SemanticModel,
    syntax: S,
    is_lifted: bool,
    is_checked: bool,
    is_compare_text: bool,
    is_implicit: bool,
) -> Operation<'db, S> {
    Operation::BinaryOperatorExpression(BinaryOperatorExpression {
        data: OperationData::new(semantic_model, syntax, result_type, None, is_implicit),
        operator_kind,
        left: Box::new(left),
        right: Box::new(right),
        is_lifted,
        is_checked,
        is_compare_text,
        uses_operator_method: false,
        operator_method: None,
    })
}

/// Build an invalid expression with nothing salvaged.
pub fn create_invalid_expression<'db, S: SyntaxNode>(
    semantic_model: SemanticModel,
    syntax: S,
    is_implicit: bool,
) -> Operation<'db, S> {
    create_invalid_expression_with_children(semantic_model, syntax, Vec::new(), is_implicit)
}

/// Build an invalid expression around the fragments the binder could salvage.
pub fn create_invalid_expression_with_children<'db, S: SyntaxNode>(
    semantic_model: SemanticModel,
    syntax: S,
    children: Vec<Operation<'db, S>>,
    is_implicit: bool,
) -> Operation<'db, S> {
    tracing::trace!(children = children.len(), "invalid expression");

    Operation::InvalidExpression(InvalidExpression {
        data: OperationData::valueless(semantic_model, syntax, is_implicit),
        children,
    })
}

#[cfg(test)]
mod tests {
    use optree_core::testing::TestNode;
    use optree_core::{
        Decimal, EqualsValueShape, LocalSymbol, NeverShape, Symbol, Type, TypeKind,
    };

    use super::*;
    use crate::operation::OperationKind;

    fn model(db: &salsa::DatabaseImpl) -> SemanticModel {
        optree_core::testing::model(db, "test.vb")
    }

    fn literal<'db>(
        value: i64,
        ty: Type<'db>,
        model: SemanticModel,
        syntax: TestNode,
    ) -> Operation<'db, TestNode> {
        create_literal_expression(value, Some(ty), model, syntax, false)
    }

    #[test]
    fn initializer_is_anchored_on_equals_value_clause() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let x = LocalSymbol::new(&db, Symbol::new("x"), int, false);

        let decl = TestNode::root("local_declaration", 0, 13);
        let clause = decl.child("equals_value_clause", 8, 13);
        let value = clause.child("integer_literal", 10, 13);

        let op = create_variable_declaration::<EqualsValueShape, _>(
            x,
            Some(literal(100, int, model, value.clone())),
            model,
            decl.clone(),
        );

        let declaration = op.as_variable_declaration().unwrap();
        let initializer = declaration.initializer().unwrap();
        assert_eq!(initializer.kind(), OperationKind::LocalInitializer);
        assert_eq!(initializer.syntax(), &clause);
        assert_eq!(
            initializer.as_local_initializer().unwrap().value().syntax(),
            &value
        );
        assert_eq!(op.syntax(), &decl);
    }

    #[test]
    fn initializer_falls_back_to_value_syntax() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let x = LocalSymbol::new(&db, Symbol::new("x"), int, false);

        // Parent of the wrong shape.
        let decl = TestNode::root("for_statement", 0, 20);
        let value = decl.child("integer_literal", 8, 9);
        let op = create_variable_declaration::<EqualsValueShape, _>(
            x,
            Some(literal(1, int, model, value.clone())),
            model,
            decl.clone(),
        );
        let initializer = op.as_variable_declaration().unwrap().initializer().unwrap();
        assert_eq!(initializer.syntax(), &value);

        // No parent at all.
        let orphan = TestNode::root("integer_literal", 0, 1);
        let op = create_variable_declaration::<EqualsValueShape, _>(
            x,
            Some(literal(1, int, model, orphan.clone())),
            model,
            decl.clone(),
        );
        let initializer = op.as_variable_declaration().unwrap().initializer().unwrap();
        assert_eq!(initializer.syntax(), &orphan);

        // A shape nothing satisfies.
        let clause = decl.child("equals_value_clause", 6, 9);
        let value = clause.child("integer_literal", 8, 9);
        let op = create_variable_declaration::<NeverShape, _>(
            x,
            Some(literal(1, int, model, value.clone())),
            model,
            decl,
        );
        let initializer = op.as_variable_declaration().unwrap().initializer().unwrap();
        assert_eq!(initializer.syntax(), &value);
    }

    #[test]
    fn initializer_mirrors_value_attributes() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let x = LocalSymbol::new(&db, Symbol::new("x"), int, false);
        let decl = TestNode::root("local_declaration", 0, 10);
        let value = decl.child("integer_literal", 8, 10);

        let implicit_value = create_literal_expression(0, Some(int), model, value, true);
        let op = create_variable_declaration::<EqualsValueShape, _>(
            x,
            Some(implicit_value),
            model,
            decl,
        );

        assert!(!op.is_implicit());
        assert!(op.ty().is_none());
        assert!(op.constant_value().is_none());

        let initializer = op.as_variable_declaration().unwrap().initializer().unwrap();
        assert!(initializer.is_implicit());
        assert_eq!(initializer.ty(), Some(int));
        assert_eq!(initializer.constant_value(), Some(&ConstantValue::Int64(0)));
        assert_eq!(initializer.semantic_model(), model);
    }

    #[test]
    fn declaration_without_initial_value_has_no_initializer() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let a = LocalSymbol::new(&db, Symbol::new("a"), int, false);
        let b = LocalSymbol::new(&db, Symbol::new("b"), int, false);
        let locals = DeclaredLocals::try_from(vec![a, b]).unwrap();

        let op = create_variable_declaration::<EqualsValueShape, _>(
            locals,
            None,
            model,
            TestNode::root("local_declaration", 0, 8),
        );

        let declaration = op.as_variable_declaration().unwrap();
        assert!(declaration.initializer().is_none());
        assert_eq!(declaration.locals().as_slice(), &[a, b]);
        assert_eq!(declaration.locals().first(), a);
        assert!(op.children().is_empty());
    }

    #[test]
    fn conditional_never_folds() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let boolean = Type::boolean(&db);
        let int = Type::int32(&db);
        let root = TestNode::root("conditional_expression", 0, 12);

        let condition = create_constant_literal_expression(
            ConstantValue::Boolean(true),
            Some(boolean),
            model,
            root.child("true_literal", 0, 4),
            false,
        );
        let op = create_conditional_expression(
            condition,
            literal(1, int, model, root.child("integer_literal", 7, 8)),
            literal(2, int, model, root.child("integer_literal", 11, 12)),
            Some(int),
            model,
            root,
            false,
        );

        assert!(op.constant_value().is_none());
        assert_eq!(op.ty(), Some(int));
        let conditional = op.as_conditional_expression().unwrap();
        assert_eq!(
            conditional.condition().constant_value(),
            Some(&ConstantValue::Boolean(true))
        );
        assert_eq!(
            conditional.when_false().constant_value(),
            Some(&ConstantValue::Int64(2))
        );
    }

    #[test]
    fn simple_assignment_is_wrapped_in_valueless_statement() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let stmt = TestNode::root("assignment_statement", 0, 17);
        let target_syntax = stmt.child("conditional_expression", 0, 13);
        let target_ty = Type::int64(&db);
        // `(c ? a : b) = 5`, with every operand unresolved.
        let target = create_conditional_expression(
            create_invalid_expression(model, target_syntax.child("identifier", 1, 2), false),
            create_invalid_expression(model, target_syntax.child("identifier", 5, 6), false),
            create_invalid_expression(model, target_syntax.child("identifier", 9, 10), false),
            Some(target_ty),
            model,
            target_syntax,
            false,
        );

        let op = create_simple_assignment_statement(
            target,
            literal(5, int, model, stmt.child("integer_literal", 16, 17)),
            model,
            stmt.clone(),
            true,
        );

        assert_eq!(op.kind(), OperationKind::ExpressionStatement);
        assert!(op.ty().is_none());
        assert!(op.constant_value().is_none());
        assert!(op.is_implicit());

        let expression = op.as_expression_statement().unwrap().expression();
        assert_eq!(expression.kind(), OperationKind::SimpleAssignmentExpression);
        assert_eq!(expression.ty(), Some(target_ty));
        assert!(expression.constant_value().is_none());
        assert!(expression.is_implicit());
        assert_eq!(expression.syntax(), &stmt);
    }

    #[test]
    fn compound_assignment_derives_operator_method_usage() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let money = Type::new(
            &db,
            TypeKind::Named {
                name: Symbol::new("Money"),
                args: Vec::new(),
            },
        );
        let op_add = MethodSymbol::new(
            &db,
            Symbol::new("op_Addition"),
            money,
            vec![money, money],
            money,
        );
        let stmt = TestNode::root("compound_assignment_statement", 0, 10);

        let build = |method| {
            create_compound_assignment_statement(
                create_invalid_expression(model, stmt.child("identifier", 0, 5), false),
                create_invalid_expression(model, stmt.child("identifier", 9, 10), false),
                BinaryOperatorKind::Add,
                false,
                true,
                method,
                model,
                stmt.clone(),
                false,
            )
        };

        let with_method = build(Some(op_add));
        let compound = with_method
            .as_expression_statement()
            .unwrap()
            .expression()
            .as_compound_assignment_expression()
            .unwrap();
        assert!(compound.uses_operator_method());
        assert_eq!(compound.operator_method(), Some(op_add));
        assert_eq!(compound.operator_kind(), BinaryOperatorKind::Add);
        assert!(compound.is_checked());
        assert!(!compound.is_lifted());

        let without_method = build(None);
        let compound = without_method
            .as_expression_statement()
            .unwrap()
            .expression()
            .as_compound_assignment_expression()
            .unwrap();
        assert!(!compound.uses_operator_method());
        assert!(compound.operator_method().is_none());
        assert!(without_method.ty().is_none());
    }

    #[test]
    fn compound_assignment_statement_drops_typed_expression_value() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let stmt = TestNode::root("compound_assignment_statement", 0, 6);

        let op = create_compound_assignment_statement(
            literal(1, int, model, stmt.child("integer_literal", 0, 1)),
            literal(2, int, model, stmt.child("integer_literal", 5, 6)),
            BinaryOperatorKind::Multiply,
            false,
            false,
            None,
            model,
            stmt.clone(),
            false,
        );

        assert_eq!(op.kind(), OperationKind::ExpressionStatement);
        assert!(op.ty().is_none());
        assert!(op.constant_value().is_none());

        let expression = op.as_expression_statement().unwrap().expression();
        assert_eq!(expression.kind(), OperationKind::CompoundAssignmentExpression);
        assert_eq!(expression.ty(), Some(int));
        assert!(expression.constant_value().is_none());
        assert_eq!(expression.syntax(), &stmt);
    }

    #[test]
    fn literal_always_carries_its_constant() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let decimal_ty = Type::new(&db, TypeKind::Decimal);

        let raw = literal(42, int, model, TestNode::root("integer_literal", 0, 2));
        assert_eq!(raw.constant_value(), Some(&ConstantValue::Int64(42)));
        assert_eq!(
            raw.as_literal_expression().unwrap().value(),
            &ConstantValue::Int64(42)
        );

        let price = Decimal::new(1999, 2).unwrap();
        let wrapped = create_constant_literal_expression(
            ConstantValue::Decimal(price),
            Some(decimal_ty),
            model,
            TestNode::root("decimal_literal", 0, 6),
            false,
        );
        assert_eq!(wrapped.constant_value(), Some(&ConstantValue::Decimal(price)));

        let null = create_constant_literal_expression(
            ConstantValue::Null,
            None,
            model,
            TestNode::root("nothing_literal", 0, 7),
            false,
        );
        assert_eq!(null.constant_value(), Some(&ConstantValue::Null));
        assert!(null.ty().is_none());
    }

    #[test]
    fn binary_operator_never_uses_operator_method() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let string = Type::string(&db);
        let boolean = Type::boolean(&db);
        let root = TestNode::root("binary_expression", 0, 14);

        let op = create_binary_operator_expression(
            BinaryOperatorKind::Equals,
            create_constant_literal_expression(
                ConstantValue::from("a"),
                Some(string),
                model,
                root.child("string_literal", 0, 3),
                false,
            ),
            create_constant_literal_expression(
                ConstantValue::from("A"),
                Some(string),
                model,
                root.child("string_literal", 11, 14),
                false,
            ),
            Some(boolean),
            model,
            root,
            false,
            false,
            true,
            false,
        );

        assert!(op.constant_value().is_none());
        let binary = op.as_binary_operator_expression().unwrap();
        assert!(!binary.uses_operator_method());
        assert!(binary.operator_method().is_none());
        assert!(binary.is_compare_text());
        assert_eq!(binary.left().constant_value(), Some(&ConstantValue::from("a")));
    }

    #[test]
    fn invalid_without_children_is_invalid_with_empty_children() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let syntax = TestNode::root("error", 0, 3);

        let bare = create_invalid_expression::<TestNode>(model, syntax.clone(), true);
        let empty = create_invalid_expression_with_children(model, syntax, Vec::new(), true);

        assert_eq!(bare, empty);
        assert!(bare.as_invalid_expression().unwrap().children().is_empty());
        assert!(bare.ty().is_none());
        assert!(bare.constant_value().is_none());
        assert!(bare.is_implicit());
    }

    #[test]
    fn invalid_keeps_salvaged_children_in_order() {
        let db = salsa::DatabaseImpl::default();
        let model = model(&db);
        let int = Type::int32(&db);
        let root = TestNode::root("error", 0, 9);

        let op = create_invalid_expression_with_children(
            model,
            root.clone(),
            vec![
                literal(1, int, model, root.child("integer_literal", 0, 1)),
                literal(2, int, model, root.child("integer_literal", 8, 9)),
            ],
            false,
        );

        let constants: Vec<_> = op
            .children()
            .iter()
            .map(|child| child.constant_value().cloned())
            .collect();
        assert_eq!(
            constants,
            vec![Some(ConstantValue::Int64(1)), Some(ConstantValue::Int64(2))]
        );
    }

    #[test]
    fn empty_locals_are_rejected() {
        let locals: Vec<LocalSymbol<'_>> = Vec::new();
        assert!(DeclaredLocals::try_from(locals).is_err());
    }
}
