//! Bounded well-typed program enumeration.
//!
//! A native backtracking constraint solver: root LHS match (production
//! lookup by type name), arity gating (leaf vs. function productions), type
//! linkage between a production's RHS and its children's LHS (enforced by
//! recursing per child position), leaf-ness once the depth budget is
//! exhausted, and an exact "location" (inner-node) budget threaded through
//! the recursion.

mod partition;

use crate::ast::Program;
use crate::error::SynthError;
use crate::spec::Spec;
use crate::types::Type;
use partition::compositions;
use std::collections::HashSet;

/// Enumerates well-typed [`Program`]s against a fixed [`Spec`], one "loc"
/// (inner-node count) at a time.
pub struct Enumerator<'s> {
    spec: &'s Spec,
    depth_max: usize,
}

impl<'s> Enumerator<'s> {
    pub fn new(spec: &'s Spec, depth_max: usize) -> Self {
        Self { spec, depth_max }
    }

    /// Every well-typed program of the program's output type with exactly
    /// `loc` inner nodes and depth at most `depth_max`, deduplicated
    /// structurally.
    pub fn programs_with_loc(&self, loc: usize) -> Result<Vec<Program>, SynthError> {
        let output = self.spec.output_type();
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for program in self.build(&output, loc, self.depth_max)? {
            if seen.insert(program.clone()) {
                out.push(program);
            }
        }
        Ok(out)
    }

    /// All well-typed programs of type `ty`, with exactly `loc_budget` inner
    /// nodes among them and at most `depth_budget` edges of depth.
    fn build(&self, ty: &Type, loc_budget: usize, depth_budget: usize) -> Result<Vec<Program>, SynthError> {
        let mut out = Vec::new();

        for &id in self.spec.productions.with_lhs(ty.name()) {
            let production = self.spec.productions.get(id).expect("id came from this spec's own index");

            if production.arity() == 0 {
                if loc_budget == 0 {
                    out.push(Program::leaf(self.spec, id)?);
                }
                continue;
            }

            if depth_budget == 0 || loc_budget == 0 {
                continue;
            }

            let child_types = production.rhs();
            for split in compositions(loc_budget - 1, child_types.len()) {
                let mut per_slot: Vec<Vec<Program>> = Vec::with_capacity(child_types.len());
                for (slot, child_ty) in child_types.iter().enumerate() {
                    per_slot.push(self.build(child_ty, split[slot], depth_budget - 1)?);
                }
                for children in cartesian(per_slot) {
                    out.push(Program::make(self.spec, id, children)?);
                }
            }
        }

        Ok(out)
    }
}

/// Cartesian product of per-slot candidate lists, consuming `slots`.
fn cartesian(slots: Vec<Vec<Program>>) -> Vec<Vec<Program>> {
    let mut combos: Vec<Vec<Program>> = vec![Vec::new()];
    for slot in slots {
        let mut next = Vec::with_capacity(combos.len() * slot.len());
        for combo in &combos {
            for candidate in &slot {
                let mut extended = combo.clone();
                extended.push(candidate.clone());
                next.push(extended);
            }
        }
        combos = next;
    }
    combos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ProgramSpec;
    use crate::types::{EnumType, ValueType};

    fn plus_spec() -> Spec {
        let int = ValueType::new("Int");
        let types = vec![Type::Value(int.clone())];
        let functions = vec![(
            "plus".to_string(),
            int.clone(),
            vec![Type::Value(int.clone()), Type::Value(int.clone())],
        )];
        let program = ProgramSpec::new("p", vec![int.clone(), int], ValueType::new("Int"));
        Spec::assemble(types, functions, program).unwrap()
    }

    #[test]
    fn loc_zero_yields_only_params() {
        let spec = plus_spec();
        let enumerator = Enumerator::new(&spec, 4);
        let programs = enumerator.programs_with_loc(0).unwrap();
        assert_eq!(programs.len(), 2); // @param0, @param1
        assert!(programs.iter().all(|p| p.inner_node_count() == 0));
    }

    #[test]
    fn loc_one_yields_every_plus_of_two_params() {
        let spec = plus_spec();
        let enumerator = Enumerator::new(&spec, 4);
        let programs = enumerator.programs_with_loc(1).unwrap();
        // plus(param0, param0), plus(param0, param1), plus(param1, param0), plus(param1, param1)
        assert_eq!(programs.len(), 4);
        assert!(programs.iter().all(|p| p.inner_node_count() == 1));
    }

    #[test]
    fn depth_budget_of_zero_admits_only_leaves() {
        let spec = plus_spec();
        let enumerator = Enumerator::new(&spec, 0);
        assert_eq!(enumerator.programs_with_loc(0).unwrap().len(), 2);
        assert!(enumerator.programs_with_loc(1).unwrap().is_empty());
    }

    #[test]
    fn enum_leaves_are_included_at_loc_zero() {
        let bool_ty = ValueType::new("Bool");
        let bool_lit = EnumType::new("BoolLit", vec!["true".into(), "false".into()]);
        let types = vec![Type::Value(bool_ty.clone()), Type::Enum(bool_lit.clone())];
        let functions = vec![("bool_const".to_string(), bool_ty, vec![Type::Enum(bool_lit)])];
        let program = ProgramSpec::new("p", vec![], ValueType::new("Bool"));
        let spec = Spec::assemble(types, functions, program).unwrap();

        let enumerator = Enumerator::new(&spec, 2);
        let at_zero = enumerator.programs_with_loc(0).unwrap();
        assert!(at_zero.is_empty(), "Bool has no arity-0 production of its own");

        let at_one = enumerator.programs_with_loc(1).unwrap();
        assert_eq!(at_one.len(), 2); // bool_const("true"), bool_const("false")
    }
}
