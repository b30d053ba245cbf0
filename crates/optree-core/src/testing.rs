//! Hand-built syntax trees and sessions for tests of code built on this crate.

use std::path::PathBuf;
use std::sync::Arc;

use crate::{SemanticModel, Span, SyntaxNode};

/// A syntax element with an optional parent chain, built without a parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TestNode {
    kind: &'static str,
    span: Span,
    parent: Option<Arc<TestNode>>,
}

impl TestNode {
    pub fn root(kind: &'static str, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
            parent: None,
        }
    }

    /// A new element whose parent is `self`.
    pub fn child(&self, kind: &'static str, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
            parent: Some(Arc::new(self.clone())),
        }
    }
}

impl SyntaxNode for TestNode {
    fn kind(&self) -> &str {
        self.kind
    }

    fn parent(&self) -> Option<Self> {
        self.parent.as_deref().cloned()
    }

    fn span(&self) -> Span {
        self.span
    }
}

pub fn model(db: &dyn salsa::Database, path: &str) -> SemanticModel {
    SemanticModel::new(db, PathBuf::from(path))
}
