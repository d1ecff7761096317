//! Grammar text: line-oriented statements declaring types, function
//! productions, and (after `[[PROGSPEC]]` substitution) the program
//! signature.

pub mod lexer;
pub mod parser;

pub use parser::{EnumDecl, FuncDecl, GrammarAst, ProgramDecl, ValueDecl};

use crate::error::GrammarError;

/// Placeholder token substituted with a `program NAME(T1, T2, ...) -> TR;`
/// statement so a single grammar file serves many signatures.
pub const PROGSPEC_PLACEHOLDER: &str = "[[PROGSPEC]]";

/// Substitute the `[[PROGSPEC]]` placeholder with a concrete program
/// signature statement.
pub fn substitute_progspec(grammar_text: &str, program_name: &str, arg_types: &[String], ret_type: &str) -> String {
    let progspec = format!("program {program_name}({}) -> {ret_type};", arg_types.join(", "));
    grammar_text.replace(PROGSPEC_PLACEHOLDER, &progspec)
}

/// Tokenize and parse grammar text that already has its program signature
/// substituted in.
pub fn parse(grammar_text: &str) -> Result<GrammarAst, GrammarError> {
    let tokens = lexer::tokenize(grammar_text)?;
    let ast = parser::parse(grammar_text, &tokens)?;
    if ast.program.is_none() {
        return Err(GrammarError::BadSignature {
            message: "grammar text has no `program` statement; was [[PROGSPEC]] substituted?".into(),
        });
    }
    Ok(ast)
}
