//! Syntax anchors.
//!
//! Operation nodes never own syntax. They hold a cheap handle to the syntax
//! element they were bound from, and the only structural query they need
//! from it is "who is my parent, and what shape is it". Any syntax tree that
//! can answer that implements [`SyntaxNode`]; a tree-sitter CST does so out of
//! the box.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Byte range of a syntax element in its source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes; a reversed span is empty.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A handle to an element of an already-parsed syntax tree.
///
/// Handles are compared by identity: two handles are equal iff they denote
/// the same element of the same tree.
pub trait SyntaxNode: Clone + Eq + Hash + Debug {
    /// Grammar kind of the element, e.g. `"equals_value_clause"`.
    fn kind(&self) -> &str;

    /// The enclosing element, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Source range covered by the element.
    fn span(&self) -> Span;
}

/// `kind()` is the grammar's node kind (named or anonymous, e.g. `"pair"` or
/// `":"`), `parent()` walks up the concrete tree and `span()` is the node's
/// byte range. Handles are only meaningful while their `Tree` is alive.
impl<'tree> SyntaxNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn parent(&self) -> Option<Self> {
        tree_sitter::Node::parent(self)
    }

    fn span(&self) -> Span {
        let range = self.byte_range();
        Span::new(range.start, range.end)
    }
}

/// A structural predicate over syntax elements.
///
/// Used as a type-level parameter where the binder knows statically which
/// grammar production it expects to find, e.g. the `= value` clause that
/// owns a local's initial value.
pub trait SyntaxShape<S: SyntaxNode> {
    fn matches(node: &S) -> bool;
}

/// Names a grammar kind at the type level.
pub trait SyntaxKindName {
    const KIND: &'static str;
}

/// Shape satisfied by every element whose [`SyntaxNode::kind`] equals `K::KIND`.
pub struct KindShape<K>(PhantomData<K>);

impl<S: SyntaxNode, K: SyntaxKindName> SyntaxShape<S> for KindShape<K> {
    fn matches(node: &S) -> bool {
        node.kind() == K::KIND
    }
}

/// Shape satisfied by nothing. Anchors then always fall back to themselves.
pub enum NeverShape {}

impl<S: SyntaxNode> SyntaxShape<S> for NeverShape {
    fn matches(_node: &S) -> bool {
        false
    }
}

/// The `= value` clause of a local declaration, as named by the C-family
/// grammars this layer is usually fed from.
pub struct EqualsValueClause;

impl SyntaxKindName for EqualsValueClause {
    const KIND: &'static str = "equals_value_clause";
}

/// [`KindShape`] for [`EqualsValueClause`].
pub type EqualsValueShape = KindShape<EqualsValueClause>;
