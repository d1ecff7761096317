//! Example-based acceptance: a candidate program is accepted iff it
//! evaluates, on every example's input, to that example's recorded output.
//! An [`EvalError`](crate::interpreter::EvalError) anywhere counts as a
//! rejection, not a propagated failure.

use crate::ast::Program;
use crate::interpreter::Interpreter;
use crate::spec::Spec;
use crate::value::Value;

/// One input/output pair the synthesized program must reproduce exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub input: Vec<Value>,
    pub output: Value,
}

impl Example {
    pub fn new(input: Vec<Value>, output: Value) -> Self {
        Self { input, output }
    }
}

/// Decides candidate programs against a fixed example set.
pub struct ExampleConstraintDecider<'e> {
    interpreter: Interpreter,
    examples: &'e [Example],
}

impl<'e> ExampleConstraintDecider<'e> {
    pub fn new(examples: &'e [Example]) -> Self {
        Self {
            interpreter: Interpreter::new(),
            examples,
        }
    }

    /// `true` iff `program` reproduces every example's output exactly.
    pub fn accepts(&self, spec: &Spec, program: &Program) -> bool {
        self.examples.iter().all(|example| {
            matches!(
                self.interpreter.eval(spec, program, &example.input),
                Ok(ref value) if *value == example.output
            )
        })
    }
}
