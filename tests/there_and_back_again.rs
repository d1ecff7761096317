//! "There and back again": take a program the grammar can already build,
//! turn it into examples by evaluating it on representative inputs, then
//! synthesize from those examples and check the result agrees with the
//! original on every sample, not that it is the same tree.

use progsynth::ast::Program;
use progsynth::decider::Example;
use progsynth::demos::{sample_inputs_for, GRAMMAR};
use progsynth::interpreter::Interpreter;
use progsynth::spec::assemble_from_grammar;
use progsynth::synthesizer::{SearchBounds, Synthesizer};

fn examples_from(spec: &progsynth::Spec, program: &Program, arg_types: &[&str]) -> Vec<Example> {
    let interpreter = Interpreter::new();
    sample_inputs_for(arg_types)
        .unwrap()
        .into_iter()
        .map(|input| {
            let output = interpreter.eval(spec, program, &input).unwrap();
            Example::new(input, output)
        })
        .collect()
}

#[test]
fn round_trips_a_two_argument_arithmetic_program() {
    let spec = assemble_from_grammar(GRAMMAR, "original", &["Int".into(), "Int".into()], "Int").unwrap();
    let plus = spec.productions.iter().find(|p| p.function_name() == Some("plus")).unwrap().id();
    let param0 = spec.productions.with_lhs("Int")[0];
    let param1 = spec.productions.with_lhs("Int")[1];
    let original =
        Program::make(&spec, plus, vec![Program::leaf(&spec, param0).unwrap(), Program::leaf(&spec, param1).unwrap()])
            .unwrap();

    let examples = examples_from(&spec, &original, &["Int", "Int"]);

    let synthesizer = Synthesizer::new(&spec);
    let bounds = SearchBounds { loc_max: 4, depth_max: 3 };
    let found = synthesizer.synthesize(&examples, bounds, None).unwrap().unwrap();

    let interpreter = Interpreter::new();
    for example in &examples {
        let actual = interpreter.eval(&spec, &found, &example.input).unwrap();
        assert_eq!(actual, example.output);
    }
}

#[test]
fn round_trips_a_single_argument_arithmetic_program() {
    let spec = assemble_from_grammar(GRAMMAR, "original", &["Int".into()], "Int").unwrap();
    let neg = spec.productions.iter().find(|p| p.function_name() == Some("neg")).unwrap().id();
    let param0 = spec.productions.with_lhs("Int")[0];
    let original = Program::make(&spec, neg, vec![Program::leaf(&spec, param0).unwrap()]).unwrap();

    let examples = examples_from(&spec, &original, &["Int"]);

    let synthesizer = Synthesizer::new(&spec);
    let bounds = SearchBounds { loc_max: 4, depth_max: 3 };
    let found = synthesizer.synthesize(&examples, bounds, None).unwrap().unwrap();

    let interpreter = Interpreter::new();
    for example in &examples {
        let actual = interpreter.eval(&spec, &found, &example.input).unwrap();
        assert_eq!(actual, example.output);
    }
}

#[test]
fn round_trips_a_list_program() {
    let spec = assemble_from_grammar(GRAMMAR, "original", &["List".into()], "Int").unwrap();
    let head = spec.productions.iter().find(|p| p.function_name() == Some("head")).unwrap().id();
    let param0 = spec.productions.with_lhs("List")[0];
    let original = Program::make(&spec, head, vec![Program::leaf(&spec, param0).unwrap()]).unwrap();

    let examples = examples_from(&spec, &original, &["List"]);

    let synthesizer = Synthesizer::new(&spec);
    let bounds = SearchBounds { loc_max: 4, depth_max: 3 };
    let found = synthesizer.synthesize(&examples, bounds, None).unwrap().unwrap();

    let interpreter = Interpreter::new();
    for example in &examples {
        let actual = interpreter.eval(&spec, &found, &example.input).unwrap();
        assert_eq!(actual, example.output);
    }
}
