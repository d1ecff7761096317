//! Bridges parsed grammar text to [`super::Spec::assemble`].

use super::{ProgramSpec, Spec};
use crate::error::{AssemblyError, SynthError};
use crate::grammar;
use crate::types::{EnumType, Type, ValueType};
use std::collections::HashMap;

fn resolve_value_type(
    declared: &HashMap<String, Type>,
    name: &str,
) -> Result<ValueType, AssemblyError> {
    let ty = declared.get(name).ok_or_else(|| AssemblyError::UnknownType(name.to_string()))?;
    if !ty.is_value() {
        return Err(AssemblyError::NotAValueType(name.to_string()));
    }
    match ty {
        Type::Value(v) => Ok(v.clone()),
        Type::Enum(_) => unreachable!("checked is_value above"),
    }
}

fn resolve_type(declared: &HashMap<String, Type>, name: &str) -> Result<Type, AssemblyError> {
    declared
        .get(name)
        .cloned()
        .ok_or_else(|| AssemblyError::UnknownType(name.to_string()))
}

/// Parse grammar text after substituting `program_name(arg_types) ->
/// ret_type;` into its `[[PROGSPEC]]` placeholder, then assemble a [`Spec`].
pub fn assemble_from_grammar(
    grammar_template: &str,
    program_name: &str,
    arg_types: &[String],
    ret_type: &str,
) -> Result<Spec, SynthError> {
    let text = grammar::substitute_progspec(grammar_template, program_name, arg_types, ret_type);
    let ast = grammar::parse(&text)?;

    let mut types: Vec<Type> = Vec::new();
    for decl in &ast.values {
        types.push(Type::Value(ValueType::new(decl.name.clone())));
    }
    for decl in &ast.enums {
        types.push(Type::Enum(EnumType::new(decl.name.clone(), decl.domain.clone())));
    }

    let declared: HashMap<String, Type> = types.iter().map(|t| (t.name().to_string(), t.clone())).collect();

    let mut functions = Vec::with_capacity(ast.funcs.len());
    for func in &ast.funcs {
        let lhs = resolve_value_type(&declared, &func.ret).map_err(SynthError::Assembly)?;
        let mut rhs = Vec::with_capacity(func.args.len());
        for arg in &func.args {
            rhs.push(resolve_type(&declared, arg).map_err(SynthError::Assembly)?);
        }
        functions.push((func.name.clone(), lhs, rhs));
    }

    let program_decl = ast.program.expect("grammar::parse guarantees a program statement");
    let mut input = Vec::with_capacity(program_decl.args.len());
    for arg in &program_decl.args {
        input.push(resolve_value_type(&declared, arg).map_err(SynthError::Assembly)?);
    }
    let output = resolve_value_type(&declared, &program_decl.ret).map_err(SynthError::Assembly)?;
    let program = ProgramSpec::new(program_decl.name.clone(), input, output);

    Spec::assemble(types, functions, program).map_err(SynthError::from)
}
