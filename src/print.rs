//! Pretty-printing an accepted [`Program`] as an indented tree via
//! `ptree::TreeItem`.

use crate::ast::{AstId, Program};
use crate::spec::Spec;
use ptree::TreeItem;
use std::borrow::Cow;
use std::io::Write;

/// A borrowed view of one node of a [`Program`], addressable enough to
/// implement [`TreeItem`] without cloning the arena.
#[derive(Clone)]
pub struct ProgramView<'a> {
    spec: &'a Spec,
    program: &'a Program,
    id: AstId,
}

impl<'a> ProgramView<'a> {
    pub fn new(spec: &'a Spec, program: &'a Program) -> Self {
        Self { spec, program, id: program.root() }
    }
}

impl<'a> TreeItem for ProgramView<'a> {
    type Child = Self;

    fn write_self<W: Write>(&self, f: &mut W, _style: &ptree::Style) -> std::io::Result<()> {
        let node = self.program.node(self.id);
        let production = self.spec.productions.get(node.production).expect("node references its own spec");
        write!(f, "{}", production.readable())
    }

    fn children(&self) -> Cow<[Self::Child]> {
        let node = self.program.node(self.id);
        let views: Vec<Self> = node
            .children
            .iter()
            .map(|&child| ProgramView { spec: self.spec, program: self.program, id: child })
            .collect();
        Cow::from(views)
    }
}

/// Print `program` to stdout as an indented tree.
pub fn print_tree(spec: &Spec, program: &Program) -> std::io::Result<()> {
    ptree::print_tree(&ProgramView::new(spec, program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ProgramSpec;
    use crate::types::{Type, ValueType};

    #[test]
    fn prints_without_error() {
        let int = ValueType::new("Int");
        let types = vec![Type::Value(int.clone())];
        let functions = vec![(
            "plus".to_string(),
            int.clone(),
            vec![Type::Value(int.clone()), Type::Value(int.clone())],
        )];
        let program_spec = ProgramSpec::new("p", vec![int.clone(), int], ValueType::new("Int"));
        let spec = Spec::assemble(types, functions, program_spec).unwrap();

        let plus = spec.productions.iter().find(|p| p.function_name() == Some("plus")).unwrap().id();
        let params = spec.productions.with_lhs("Int");
        let tree = Program::make(
            &spec,
            plus,
            vec![Program::leaf(&spec, params[0]).unwrap(), Program::leaf(&spec, params[1]).unwrap()],
        )
        .unwrap();

        print_tree(&spec, &tree).unwrap();
    }
}
