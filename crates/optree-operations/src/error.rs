//! Error types.

use derive_more::{Display, Error};

/// A variable declaration was requested for zero locals.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display("a variable declaration must declare at least one local")]
pub struct EmptyDeclarationError;
