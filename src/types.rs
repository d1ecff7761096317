//! Type model: kinds of types and structural equality.
//!
//! Types are immutable once added to a [`crate::spec::TypeSpec`]. Equality
//! and hashing are by `name`, matching the "type names are unique within a
//! spec" invariant: two `Type`s with the same name are the same type even
//! if constructed separately (the enumerator compares child LHS types this
//! way without needing a shared registry).

use std::hash::{Hash, Hasher};

/// A finite ordered list of string values, e.g. a `BoolLit` type with domain
/// `["true", "false"]`.
#[derive(Debug, Clone)]
pub struct EnumType {
    pub name: String,
    pub domain: Vec<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, domain: Vec<String>) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }
}

/// An opaque semantic type such as `Int`, `Bool`, `Str`, `List`. Only
/// `ValueType`s may appear on a program's input/output signature.
#[derive(Debug, Clone)]
pub struct ValueType {
    pub name: String,
}

impl ValueType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A type declared in a spec: either an enumeration or an opaque value type.
#[derive(Debug, Clone)]
pub enum Type {
    Enum(EnumType),
    Value(ValueType),
}

impl Type {
    pub fn name(&self) -> &str {
        match self {
            Type::Enum(t) => &t.name,
            Type::Value(t) => &t.name,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Type::Value(_))
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Type::Enum(t) => Some(t),
            Type::Value(_) => None,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}
impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}
