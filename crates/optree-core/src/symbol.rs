//! Interned names for locals, methods and named types.

use std::fmt;
use std::sync::LazyLock;

use lasso::{Rodeo, Spur};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};

static NAMES: LazyLock<RwLock<Rodeo>> = LazyLock::new(|| RwLock::new(Rodeo::default()));

/// An interned name.
///
/// Names handed over by the binder are interned once into a process-wide
/// table, so operation nodes can carry and compare them as 4-byte keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, salsa::Update)]
pub struct Symbol(Spur);

impl Symbol {
    /// Intern a name that lives for the whole program.
    pub fn new(text: &'static str) -> Self {
        Self::intern_with(text, |names| names.get_or_intern_static(text))
    }

    /// Intern a name built at runtime.
    pub fn from_dynamic(text: &str) -> Self {
        Self::intern_with(text, |names| names.get_or_intern(text))
    }

    fn intern_with(text: &str, insert: impl FnOnce(&mut Rodeo) -> Spur) -> Self {
        let guard = NAMES.upgradable_read();
        if let Some(key) = guard.get(text) {
            return Symbol(key);
        }
        let mut names = RwLockUpgradableReadGuard::upgrade(guard);
        Symbol(insert(&mut names))
    }

    /// Run `f` against the interned text without allocating.
    pub fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let names = NAMES.read_recursive();
        f(names.resolve(&self.0))
    }

    /// Copy the interned text out.
    pub fn text(&self) -> String {
        self.with_str(str::to_owned)
    }
}

impl From<&'static str> for Symbol {
    fn from(text: &'static str) -> Self {
        Symbol::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Symbol::from_dynamic(&text)
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.with_str(|s| s == other)
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.with_str(|s| s == *other)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| f.write_str(s))
    }
}
