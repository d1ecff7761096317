//! Spec assembly: bundles `TypeSpec`, `ProductionSpec` and `ProgramSpec`
//! into a read-only [`Spec`] shared by the enumerator and decider.

mod grammar_adapter;

use crate::error::AssemblyError;
use crate::production::{Production, ProductionId};
use crate::types::{EnumType, Type, ValueType};
use std::collections::HashMap;

pub use grammar_adapter::assemble_from_grammar;

/// `name` -> [`Type`] mapping. Insertion order is preserved, which is what
/// makes enumeration order reproducible.
#[derive(Debug, Default)]
pub struct TypeSpec {
    order: Vec<String>,
    types: HashMap<String, Type>,
}

impl TypeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Add `ty` to this spec. Returns [`AssemblyError::DuplicateType`] if a
    /// type of the same name is already defined.
    pub fn define(&mut self, ty: Type) -> Result<(), AssemblyError> {
        let name = ty.name().to_string();
        if self.types.contains_key(&name) {
            return Err(AssemblyError::DuplicateType(name));
        }
        self.order.push(name.clone());
        self.types.insert(name, ty);
        Ok(())
    }

    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.order.iter().map(move |name| &self.types[name])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// `(name, input, output)` signature for the program being synthesized.
#[derive(Debug, Clone)]
pub struct ProgramSpec {
    pub name: String,
    pub input: Vec<ValueType>,
    pub output: ValueType,
}

impl ProgramSpec {
    pub fn new(name: impl Into<String>, input: Vec<ValueType>, output: ValueType) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn num_input(&self) -> usize {
        self.input.len()
    }
}

/// All productions, indexed by id, plus an LHS-name -> productions index
/// maintained in insertion order.
#[derive(Debug, Default)]
pub struct ProductionSpec {
    productions: Vec<Production>,
    lhs_index: HashMap<String, Vec<ProductionId>>,
}

impl ProductionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> ProductionId {
        ProductionId(self.productions.len() as u32)
    }

    fn push(&mut self, production: Production) -> ProductionId {
        let id = production.id();
        self.lhs_index
            .entry(production.lhs().name().to_string())
            .or_default()
            .push(id);
        self.productions.push(production);
        id
    }

    pub fn add_enum(&mut self, lhs: EnumType, choice: usize) -> ProductionId {
        let id = self.next_id();
        self.push(Production::Enum { id, lhs, choice })
    }

    pub fn add_param(&mut self, lhs: ValueType, index: usize) -> ProductionId {
        let id = self.next_id();
        self.push(Production::Param { id, lhs, index })
    }

    pub fn add_function(&mut self, name: impl Into<String>, lhs: ValueType, rhs: Vec<Type>) -> ProductionId {
        let id = self.next_id();
        self.push(Production::Function {
            id,
            name: name.into(),
            lhs,
            rhs,
        })
    }

    pub fn get(&self, id: ProductionId) -> Option<&Production> {
        self.productions.get(id.0 as usize)
    }

    /// Productions whose LHS type name is `type_name`, in insertion order.
    pub fn with_lhs(&self, type_name: &str) -> &[ProductionId] {
        self.lhs_index
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Production> {
        self.productions.iter()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}

/// A fully assembled, read-only specification: types, the program's
/// signature, and the productions available to build it.
pub struct Spec {
    pub types: TypeSpec,
    pub program: ProgramSpec,
    pub productions: ProductionSpec,
}

impl Spec {
    /// Assemble a [`Spec`] from declared types, function productions, and a
    /// program signature, auto-generating one `Enum` production per domain
    /// element of every `EnumType` and one `Param` production per input
    /// position. Function productions may be supplied in any order relative
    /// to that auto-generation: ids are stable once assigned, not meaningful
    /// before assembly completes.
    pub fn assemble(
        types: Vec<Type>,
        functions: Vec<(String, ValueType, Vec<Type>)>,
        program: ProgramSpec,
    ) -> Result<Self, AssemblyError> {
        let mut type_spec = TypeSpec::new();
        for ty in types {
            type_spec.define(ty)?;
        }

        for input in &program.input {
            if type_spec.get(&input.name).is_none() {
                return Err(AssemblyError::UnknownType(input.name.clone()));
            }
        }
        if type_spec.get(&program.output.name).is_none() {
            return Err(AssemblyError::UnknownType(program.output.name.clone()));
        }

        let mut production_spec = ProductionSpec::new();

        for ty in type_spec.types() {
            if let Some(enum_ty) = ty.as_enum() {
                for choice in 0..enum_ty.domain.len() {
                    production_spec.add_enum(enum_ty.clone(), choice);
                }
            }
        }

        for (index, input) in program.input.iter().enumerate() {
            production_spec.add_param(input.clone(), index);
        }

        for (name, lhs, rhs) in functions {
            if type_spec.get(&lhs.name).is_none() {
                return Err(AssemblyError::UnknownType(lhs.name.clone()));
            }
            for rhs_ty in &rhs {
                if type_spec.get(rhs_ty.name()).is_none() {
                    return Err(AssemblyError::UnknownType(rhs_ty.name().to_string()));
                }
            }
            production_spec.add_function(name, lhs, rhs);
        }

        Ok(Spec {
            types: type_spec,
            program,
            productions: production_spec,
        })
    }

    pub fn output_type(&self) -> Type {
        Type::Value(self.program.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> ValueType {
        ValueType::new("Int")
    }

    #[test]
    fn assembly_auto_generates_enum_and_param_productions() {
        let types = vec![
            Type::Value(int()),
            Type::Enum(EnumType::new("BoolLit", vec!["true".into(), "false".into()])),
        ];
        let program = ProgramSpec::new("p", vec![int(), int()], int());
        let spec = Spec::assemble(types, vec![], program).unwrap();

        // 2 enum choices + 2 params = 4 productions, no user functions.
        assert_eq!(spec.productions.len(), 4);
        assert_eq!(spec.productions.with_lhs("Int").len(), 2);
        assert_eq!(spec.productions.with_lhs("BoolLit").len(), 2);
    }

    #[test]
    fn duplicate_type_name_is_rejected() {
        let types = vec![Type::Value(int()), Type::Value(int())];
        let program = ProgramSpec::new("p", vec![int()], int());
        let err = Spec::assemble(types, vec![], program).unwrap_err();
        assert!(matches!(err, AssemblyError::DuplicateType(name) if name == "Int"));
    }

    #[test]
    fn unknown_type_on_signature_is_rejected() {
        let types = vec![Type::Value(int())];
        let program = ProgramSpec::new("p", vec![ValueType::new("Bool")], int());
        let err = Spec::assemble(types, vec![], program).unwrap_err();
        assert!(matches!(err, AssemblyError::UnknownType(name) if name == "Bool"));
    }

    #[test]
    fn unknown_type_in_function_rhs_is_rejected() {
        let types = vec![Type::Value(int())];
        let program = ProgramSpec::new("p", vec![int()], int());
        let err = Spec::assemble(
            types,
            vec![("plus".into(), int(), vec![Type::Value(ValueType::new("Bogus"))])],
            program,
        )
        .unwrap_err();
        assert!(matches!(err, AssemblyError::UnknownType(name) if name == "Bogus"));
    }
}
