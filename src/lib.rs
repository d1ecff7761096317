//! A bounded program synthesizer by example for a small, typed first-order
//! DSL: given a grammar of typed productions, a program signature, and a
//! set of input/output examples, search well-typed abstract syntax trees
//! up to a size and depth bound for one that reproduces every example, or
//! report that none exists within those bounds.
//!
//! # Overview
//!
//! A [`spec::Spec`] bundles three things: the declared [`types::Type`]s, the
//! [`production::Production`]s available at each AST position, and the
//! program's input/output signature. A spec can be built directly
//! ([`spec::Spec::assemble`]) or from grammar text via
//! [`spec::assemble_from_grammar`] (see the [`grammar`] module for the text
//! format).
//!
//! [`enumerator::Enumerator`] walks a spec's productions to build every
//! well-typed [`ast::Program`] at a given size ("location") budget and depth
//! bound. [`interpreter::Interpreter`] evaluates a `Program` against a
//! concrete input tuple, producing a [`value::Value`] or an
//! [`interpreter::EvalError`] (a runtime semantic failure like
//! divide-by-zero, never a panic). [`decider::ExampleConstraintDecider`]
//! turns a set of [`decider::Example`]s into an acceptance test over
//! programs. [`synthesizer::Synthesizer`] ties these together: grow the
//! location budget, enumerate, decide, stop at the first acceptance or at
//! the bound.
//!
//! # Example
//!
//! ```
//! use progsynth::decider::Example;
//! use progsynth::spec::{ProgramSpec, Spec};
//! use progsynth::synthesizer::{SearchBounds, Synthesizer};
//! use progsynth::types::{Type, ValueType};
//! use progsynth::value::Value;
//!
//! let int = ValueType::new("Int");
//! let types = vec![Type::Value(int.clone())];
//! let functions = vec![(
//!     "plus".to_string(),
//!     int.clone(),
//!     vec![Type::Value(int.clone()), Type::Value(int.clone())],
//! )];
//! let program = ProgramSpec::new("p", vec![int.clone(), int], ValueType::new("Int"));
//! let spec = Spec::assemble(types, functions, program).unwrap();
//!
//! let examples = vec![
//!     Example::new(vec![Value::Int(1), Value::Int(2)], Value::Int(3)),
//!     Example::new(vec![Value::Int(4), Value::Int(5)], Value::Int(9)),
//! ];
//!
//! let synthesizer = Synthesizer::new(&spec);
//! let bounds = SearchBounds { loc_max: 2, depth_max: 2 };
//! let found = synthesizer.synthesize(&examples, bounds, None).unwrap().unwrap();
//! assert_eq!(found.readable(&spec), "plus(@param0, @param1)");
//! ```

pub mod ast;
pub mod decider;
pub mod demos;
pub mod enumerator;
pub mod error;
pub mod example_io;
pub mod grammar;
pub mod interpreter;
pub mod print;
pub mod production;
pub mod spec;
pub mod synthesizer;
pub mod types;
pub mod util;
pub mod value;

pub use ast::Program;
pub use decider::{Example, ExampleConstraintDecider};
pub use error::SynthError;
pub use spec::Spec;
pub use synthesizer::{Deadline, SearchBounds, SynthesisOutcome, Synthesizer};
pub use value::Value;
