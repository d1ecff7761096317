//! Fixed-arity AST, arena-backed to give the enumerator cheap structural
//! equality and hashing for deduplication, and to let the decider walk
//! many candidates without cloning subtrees.

use crate::error::AstError;
use crate::production::ProductionId;
use crate::spec::Spec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of a node within a [`Program`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AstId(pub u32);

#[derive(Debug, Clone)]
pub struct AstNode {
    pub production: ProductionId,
    pub children: Vec<AstId>,
}

/// A well-typed program tree: an arena of nodes plus the id of its root.
/// Construction always goes through [`Program::make`], which validates
/// arity and child LHS types against a [`Spec`].
#[derive(Debug, Clone)]
pub struct Program {
    arena: Vec<AstNode>,
    root: AstId,
}

impl Program {
    /// Build a single node whose children are already-built subtrees,
    /// validating its arity and each child's LHS type against `spec`.
    pub fn make(spec: &Spec, production: ProductionId, children: Vec<Program>) -> Result<Self, AstError> {
        let prod = spec
            .productions
            .get(production)
            .unwrap_or_else(|| panic!("production {production:?} not found in spec"));

        if children.len() != prod.arity() {
            return Err(AstError::ArityMismatch {
                production,
                expected: prod.arity(),
                actual: children.len(),
            });
        }

        for (index, child) in children.iter().enumerate() {
            let expected = prod.rhs_at(index).expect("arity already checked above");
            let child_prod = spec.productions.get(child.root_production()).expect("child production exists");
            let actual = child_prod.lhs();
            if &actual != expected {
                return Err(AstError::TypeMismatch {
                    production,
                    index,
                    expected: expected.name().to_string(),
                    actual: actual.name().to_string(),
                });
            }
        }

        let mut arena = Vec::new();
        let mut child_ids = Vec::with_capacity(children.len());
        for child in children {
            let offset = arena.len() as u32;
            child_ids.push(AstId(offset + child.root.0));
            arena.extend(child.arena);
        }

        let root = AstId(arena.len() as u32);
        arena.push(AstNode {
            production,
            children: child_ids,
        });

        Ok(Program { arena, root })
    }

    pub fn leaf(spec: &Spec, production: ProductionId) -> Result<Self, AstError> {
        Self::make(spec, production, Vec::new())
    }

    pub fn root_production(&self) -> ProductionId {
        self.node(self.root).production
    }

    pub fn node(&self, id: AstId) -> &AstNode {
        &self.arena[id.0 as usize]
    }

    pub fn root(&self) -> AstId {
        self.root
    }

    pub fn root_node(&self) -> &AstNode {
        self.node(self.root)
    }

    /// Maximum root-to-leaf edge count.
    pub fn depth(&self) -> usize {
        fn depth_of(program: &Program, id: AstId) -> usize {
            let node = program.node(id);
            node.children
                .iter()
                .map(|&c| 1 + depth_of(program, c))
                .max()
                .unwrap_or(0)
        }
        depth_of(self, self.root)
    }

    /// Count of non-leaf (arity > 0) nodes: the program's size budget.
    pub fn inner_node_count(&self) -> usize {
        self.arena.iter().filter(|n| !n.children.is_empty()).count()
    }

    pub fn readable(&self, spec: &Spec) -> String {
        fn render(program: &Program, spec: &Spec, id: AstId) -> String {
            let node = program.node(id);
            let prod = spec.productions.get(node.production).unwrap();
            if node.children.is_empty() {
                prod.readable()
            } else {
                let args: Vec<String> = node.children.iter().map(|&c| render(program, spec, c)).collect();
                format!("{}({})", prod.readable(), args.join(", "))
            }
        }
        render(self, spec, self.root)
    }

    /// Structural shape rooted at `self.root`, used for equality/hashing so
    /// two `Program`s from different arenas compare equal iff they denote
    /// the same tree.
    fn shape(&self, id: AstId, out: &mut Vec<ProductionId>) {
        let node = self.node(id);
        out.push(node.production);
        out.push(ProductionId(node.children.len() as u32));
        for &child in &node.children {
            self.shape(child, out);
        }
    }

    fn shape_vec(&self) -> Vec<ProductionId> {
        let mut out = Vec::new();
        self.shape(self.root, &mut out);
        out
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn render(program: &Program, f: &mut fmt::Formatter<'_>, id: AstId) -> fmt::Result {
            let node = program.node(id);
            write!(f, "{:?}", node.production)?;
            if !node.children.is_empty() {
                write!(f, "(")?;
                for (i, &child) in node.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    render(program, f, child)?;
                }
                write!(f, ")")?;
            }
            Ok(())
        }
        render(self, f, self.root)
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.shape_vec() == other.shape_vec()
    }
}
impl Eq for Program {}

impl Hash for Program {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape_vec().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ProgramSpec;
    use crate::types::{Type, ValueType};

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
    fn well_typed_tree_constructs() {
        let spec = plus_spec();
        let plus_id = spec.productions.iter().find(|p| p.function_name() == Some("plus")).unwrap().id();
        let param0 = spec.productions.with_lhs("Int")[0];
        let param1 = spec.productions.with_lhs("Int")[1];

        let p0 = Program::leaf(&spec, param0).unwrap();
        let p1 = Program::leaf(&spec, param1).unwrap();
        let tree = Program::make(&spec, plus_id, vec![p0, p1]).unwrap();

        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.inner_node_count(), 1);
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let spec = plus_spec();
        let plus_id = spec.productions.iter().find(|p| p.function_name() == Some("plus")).unwrap().id();
        let param0 = spec.productions.with_lhs("Int")[0];
        let p0 = Program::leaf(&spec, param0).unwrap();

        let err = Program::make(&spec, plus_id, vec![p0]).unwrap_err();
        assert!(matches!(err, AstError::ArityMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn structurally_equal_trees_from_different_arenas_compare_equal() {
        let spec = plus_spec();
        let plus_id = spec.productions.iter().find(|p| p.function_name() == Some("plus")).unwrap().id();
        let param0 = spec.productions.with_lhs("Int")[0];
        let param1 = spec.productions.with_lhs("Int")[1];

        let a = Program::make(
            &spec,
            plus_id,
            vec![Program::leaf(&spec, param0).unwrap(), Program::leaf(&spec, param1).unwrap()],
        )
        .unwrap();
        let b = Program::make(
            &spec,
            plus_id,
            vec![Program::leaf(&spec, param0).unwrap(), Program::leaf(&spec, param1).unwrap()],
        )
        .unwrap();
        assert_eq!(a, b);

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b), "b should already be present via structural equality");
    }
}
