//! Semantic facts handed over by the binder.
//!
//! All of these live in the binder's salsa database. Operation nodes only
//! store their ids, which are `Copy` and never own the underlying data.

use std::path::PathBuf;

use crate::Symbol;

/// The semantic session a tree was bound in.
///
/// One model per bound document. Consumers use it to run follow-up queries
/// against the database that produced the tree.
#[salsa::input(debug)]
pub struct SemanticModel {
    #[returns(ref)]
    pub path: PathBuf,
}

/// A resolved type.
#[salsa::interned(debug)]
pub struct Type<'db> {
    #[returns(ref)]
    pub kind: TypeKind<'db>,
}

/// The different kinds of types the binder can resolve.
#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum TypeKind<'db> {
    /// Fixed-width integral type.
    Integral { bits: u8, signed: bool },
    /// IEEE floating point; `bits` is 32 or 64.
    Float { bits: u8 },
    /// 128-bit scaled decimal.
    Decimal,
    Boolean,
    Char,
    String,
    Object,
    /// Named user type, possibly generic.
    Named { name: Symbol, args: Vec<Type<'db>> },
    /// Nullable wrapper over a value type.
    Nullable(Type<'db>),
    /// Placeholder for a type the binder could not resolve.
    Error,
}

impl<'db> Type<'db> {
    pub fn int32(db: &'db dyn salsa::Database) -> Self {
        Self::new(db, TypeKind::Integral { bits: 32, signed: true })
    }

    pub fn int64(db: &'db dyn salsa::Database) -> Self {
        Self::new(db, TypeKind::Integral { bits: 64, signed: true })
    }

    pub fn boolean(db: &'db dyn salsa::Database) -> Self {
        Self::new(db, TypeKind::Boolean)
    }

    pub fn string(db: &'db dyn salsa::Database) -> Self {
        Self::new(db, TypeKind::String)
    }

    pub fn error(db: &'db dyn salsa::Database) -> Self {
        Self::new(db, TypeKind::Error)
    }

    /// Whether this is `T?` for some `T`.
    pub fn is_nullable(self, db: &'db dyn salsa::Database) -> bool {
        matches!(self.kind(db), TypeKind::Nullable(_))
    }

    /// Render the type the way diagnostics and tree dumps show it.
    pub fn display(self, db: &'db dyn salsa::Database) -> String {
        match self.kind(db) {
            TypeKind::Integral { bits, signed } => {
                format!("{}{bits}", if *signed { "Int" } else { "UInt" })
            }
            TypeKind::Float { bits: 32 } => "Single".to_string(),
            TypeKind::Float { .. } => "Double".to_string(),
            TypeKind::Decimal => "Decimal".to_string(),
            TypeKind::Boolean => "Boolean".to_string(),
            TypeKind::Char => "Char".to_string(),
            TypeKind::String => "String".to_string(),
            TypeKind::Object => "Object".to_string(),
            TypeKind::Named { name, args } if args.is_empty() => name.to_string(),
            TypeKind::Named { name, args } => {
                let args: Vec<_> = args.iter().map(|arg| arg.display(db)).collect();
                format!("{name}<{}>", args.join(", "))
            }
            TypeKind::Nullable(inner) => format!("{}?", inner.display(db)),
            TypeKind::Error => "?".to_string(),
        }
    }
}

/// A local variable declared in a method body.
#[salsa::interned(debug)]
pub struct LocalSymbol<'db> {
    pub name: Symbol,
    pub ty: Type<'db>,
    pub is_const: bool,
}

/// A method, used here for user-defined operator implementations.
#[salsa::interned(debug)]
pub struct MethodSymbol<'db> {
    pub name: Symbol,
    pub containing_type: Type<'db>,
    #[returns(ref)]
    pub parameters: Vec<Type<'db>>,
    pub return_type: Type<'db>,
}
