//! Text dumps of operation trees.
//!
//! One line per operation, children indented below their parent:
//!
//! ```text
//! ExpressionStatement @0..9
//!   CompoundAssignmentExpression operator=Add method=op_Add type=Money @0..9
//!     InvalidExpression type=? @0..1
//!     LiteralExpression type=Int32 constant=1 @5..6
//! ```

use std::fmt::Write as _;

use optree_core::SyntaxNode;

use crate::operation::Operation;

/// Render `operation` and everything below it.
pub fn print_operation<'db, S: SyntaxNode>(
    db: &'db dyn salsa::Database,
    operation: &Operation<'db, S>,
) -> String {
    let mut lines = Vec::new();
    print_into(db, operation, 0, &mut lines);
    lines.join("\n")
}

fn print_into<'db, S: SyntaxNode>(
    db: &'db dyn salsa::Database,
    operation: &Operation<'db, S>,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let mut line = format!("{:indent$}{}", "", operation.kind(), indent = depth * 2);

    match operation {
        Operation::VariableDeclaration(node) => {
            let names: Vec<_> = node
                .locals()
                .iter()
                .map(|local| local.name(db).to_string())
                .collect();
            let _ = write!(line, " locals=[{}]", names.join(", "));
        }
        Operation::CompoundAssignmentExpression(node) => {
            let _ = write!(line, " operator={}", node.operator_kind());
            push_flag(&mut line, "lifted", node.is_lifted());
            push_flag(&mut line, "checked", node.is_checked());
            if let Some(method) = node.operator_method() {
                let _ = write!(line, " method={}", method.name(db));
            }
        }
        Operation::BinaryOperatorExpression(node) => {
            let _ = write!(line, " operator={}", node.operator_kind());
            push_flag(&mut line, "lifted", node.is_lifted());
            push_flag(&mut line, "checked", node.is_checked());
            push_flag(&mut line, "compare_text", node.is_compare_text());
            if let Some(method) = node.operator_method() {
                let _ = write!(line, " method={}", method.name(db));
            }
        }
        _ => {}
    }

    if let Some(ty) = operation.ty() {
        let _ = write!(line, " type={}", ty.display(db));
    }
    if let Some(constant) = operation.constant_value() {
        let _ = write!(line, " constant={constant}");
    }
    push_flag(&mut line, "implicit", operation.is_implicit());
    let _ = write!(line, " @{}", operation.syntax().span());

    lines.push(line);
    for child in operation.children() {
        print_into(db, child, depth + 1, lines);
    }
}

fn push_flag(line: &mut String, name: &str, set: bool) {
    if set {
        line.push(' ');
        line.push_str(name);
    }
}
