//! Post-order evaluator: for an AST node, evaluate each child against the
//! example's input tuple, then apply the operator identified by the node's
//! production.
//!
//! Any [`EvalError`] anywhere in the tree propagates to the top and is
//! reported to the decider as "this program does not fit this example". It
//! is never an abort of synthesis.

mod ops;

use crate::ast::{AstId, Program};
use crate::production::Production;
use crate::spec::Spec;
use crate::value::Value;
use thiserror::Error;

/// A runtime semantic failure: empty `head`, divide-by-zero, a type
/// mismatch on an operator's argument, and so on. Caught by the decider,
/// never escapes as a [`crate::error::SynthError`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("empty list passed to `{0}`")]
    EmptyList(&'static str),
    #[error("division by zero")]
    DivideByZero,
    #[error("`{op}` requires {requirement}")]
    DomainError { op: &'static str, requirement: &'static str },
    #[error("index {index} out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("`{op}` expected argument {index} to be {expected}, got {actual}")]
    TypeMismatch {
        op: &'static str,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
    #[error("invalid integer literal `{0}`")]
    InvalidIntLiteral(String),
    #[error("invalid boolean literal `{0}`")]
    InvalidBoolLiteral(String),
}

/// Stateless post-order interpreter for the DSL.
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `program` against `input`, under `spec`'s production table.
    pub fn eval(&self, spec: &Spec, program: &Program, input: &[Value]) -> Result<Value, EvalError> {
        self.eval_node(spec, program, program.root(), input)
    }

    fn eval_node(&self, spec: &Spec, program: &Program, id: AstId, input: &[Value]) -> Result<Value, EvalError> {
        let node = program.node(id);
        let production = spec
            .productions
            .get(node.production)
            .expect("AST nodes always reference productions from the same spec");

        match production {
            Production::Enum { lhs, choice, .. } => Ok(Value::Str(lhs.domain[*choice].clone())),
            Production::Param { .. } => Ok(input[production.param_index().expect("Param production")].clone()),
            Production::Function { name, .. } => {
                let mut args = Vec::with_capacity(node.children.len());
                for &child in &node.children {
                    args.push(self.eval_node(spec, program, child, input)?);
                }
                ops::apply(name, args)
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ProgramSpec;
    use crate::types::{EnumType, Type, ValueType};

    fn spec_with_plus() -> Spec {
        let int = ValueType::new("Int");
        let types = vec![Type::Value(int.clone())];
        let functions = vec![("plus".to_string(), int.clone(), vec![Type::Value(int.clone()), Type::Value(int.clone())])];
        let program = ProgramSpec::new("p", vec![int.clone(), int], ValueType::new("Int"));
        Spec::assemble(types, functions, program).unwrap()
    }

    #[test]
    fn evaluates_plus_of_params() {
        let spec = spec_with_plus();
        let plus = spec.productions.iter().find(|p| p.function_name() == Some("plus")).unwrap().id();
        let params = spec.productions.with_lhs("Int");
        let p0 = Program::leaf(&spec, params[0]).unwrap();
        let p1 = Program::leaf(&spec, params[1]).unwrap();
        let tree = Program::make(&spec, plus, vec![p0, p1]).unwrap();

        let result = Interpreter::new().eval(&spec, &tree, &[Value::Int(10), Value::Int(3)]).unwrap();
        assert_eq!(result, Value::Int(13));
    }

    #[test]
    fn divide_by_zero_is_eval_error_not_panic() {
        let int = ValueType::new("Int");
        let types = vec![Type::Value(int.clone())];
        let functions = vec![("div".to_string(), int.clone(), vec![Type::Value(int.clone()), Type::Value(int.clone())])];
        let program = ProgramSpec::new("p", vec![int.clone(), int], ValueType::new("Int"));
        let spec = Spec::assemble(types, functions, program).unwrap();

        let div = spec.productions.iter().find(|p| p.function_name() == Some("div")).unwrap().id();
        let params = spec.productions.with_lhs("Int");
        let tree = Program::make(
            &spec,
            div,
            vec![Program::leaf(&spec, params[0]).unwrap(), Program::leaf(&spec, params[1]).unwrap()],
        )
        .unwrap();

        let err = Interpreter::new().eval(&spec, &tree, &[Value::Int(5), Value::Int(0)]).unwrap_err();
        assert_eq!(err, EvalError::DivideByZero);
    }

    #[test]
    fn bool_const_from_enum_literal() {
        let bool_ty = ValueType::new("Bool");
        let bool_lit = EnumType::new("BoolLit", vec!["true".into(), "false".into()]);
        let types = vec![Type::Value(bool_ty.clone()), Type::Enum(bool_lit.clone())];
        let functions = vec![("bool_const".to_string(), bool_ty, vec![Type::Enum(bool_lit)])];
        let program = ProgramSpec::new("p", vec![], ValueType::new("Bool"));
        let spec = Spec::assemble(types, functions, program).unwrap();

        let bool_const = spec.productions.iter().find(|p| p.function_name() == Some("bool_const")).unwrap().id();
        let false_lit = spec
            .productions
            .with_lhs("BoolLit")
            .iter()
            .copied()
            .find(|&id| spec.productions.get(id).unwrap().enum_value() == Some("false"))
            .unwrap();

        let tree = Program::make(&spec, bool_const, vec![Program::leaf(&spec, false_lit).unwrap()]).unwrap();
        let result = Interpreter::new().eval(&spec, &tree, &[]).unwrap();
        assert_eq!(result, Value::Bool(false));
    }
}
