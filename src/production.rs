//! Production model: tagged variants carrying a globally unique id and an
//! LHS type.
//!
//! Productions are immutable once added to a [`crate::spec::ProductionSpec`].
//! Equality is by `id`.

use crate::types::{EnumType, Type, ValueType};
use std::fmt;

/// Globally unique, non-negative production id. Stable once assigned:
/// assembly order between auto-generated and user-declared productions
/// never matters, only the final id a production ends up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductionId(pub u32);

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single grammar rule: the atomic unit the enumerator places at each AST
/// node.
#[derive(Debug, Clone)]
pub enum Production {
    /// Selects one value out of an [`EnumType`]'s domain. Arity 0.
    Enum {
        id: ProductionId,
        lhs: EnumType,
        choice: usize,
    },
    /// Refers to the `index`-th input parameter of the program. Arity 0.
    Param {
        id: ProductionId,
        lhs: ValueType,
        index: usize,
    },
    /// A named operator with an ordered list of argument types.
    Function {
        id: ProductionId,
        name: String,
        lhs: ValueType,
        rhs: Vec<Type>,
    },
}

impl PartialEq for Production {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
impl Eq for Production {}

impl Production {
    pub fn id(&self) -> ProductionId {
        match self {
            Production::Enum { id, .. } => *id,
            Production::Param { id, .. } => *id,
            Production::Function { id, .. } => *id,
        }
    }

    /// The left-hand-side (produced) type of this production.
    pub fn lhs(&self) -> Type {
        match self {
            Production::Enum { lhs, .. } => Type::Enum(lhs.clone()),
            Production::Param { lhs, .. } => Type::Value(lhs.clone()),
            Production::Function { lhs, .. } => Type::Value(lhs.clone()),
        }
    }

    /// 0 for `Enum`/`Param`, `len(rhs)` for `Function`.
    pub fn arity(&self) -> usize {
        match self {
            Production::Enum { .. } | Production::Param { .. } => 0,
            Production::Function { rhs, .. } => rhs.len(),
        }
    }

    /// The right-hand-side (consumed) types, in order. Empty for leaves.
    pub fn rhs(&self) -> &[Type] {
        match self {
            Production::Enum { .. } | Production::Param { .. } => &[],
            Production::Function { rhs, .. } => rhs,
        }
    }

    pub fn rhs_at(&self, index: usize) -> Option<&Type> {
        self.rhs().get(index)
    }

    /// The enum choice string this production selects, if it is an `Enum`
    /// production.
    pub fn enum_value(&self) -> Option<&str> {
        match self {
            Production::Enum { lhs, choice, .. } => lhs.domain.get(*choice).map(String::as_str),
            _ => None,
        }
    }

    pub fn function_name(&self) -> Option<&str> {
        match self {
            Production::Function { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn param_index(&self) -> Option<usize> {
        match self {
            Production::Param { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Readable form used for logging and printed programs: `fn(child, child)`
    /// / `@paramN` / `"enumvalue"`.
    pub fn readable(&self) -> String {
        match self {
            Production::Enum { lhs, choice, .. } => {
                format!("\"{}\"", lhs.domain[*choice])
            }
            Production::Param { index, .. } => format!("@param{index}"),
            Production::Function { name, .. } => name.clone(),
        }
    }
}
