//! CLI driver: parses a grammar file and an examples file, searches for a
//! program, and reports the result.

use clap::{Parser, Subcommand};
use progsynth::example_io::parse_examples;
use progsynth::spec::assemble_from_grammar;
use progsynth::synthesizer::{Deadline, SearchBounds, SynthesisOutcome, Synthesizer};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EXIT_GRAMMAR_OR_SIGNATURE_ERROR: u8 = 2;
const EXIT_INTERNAL_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "progsynth", about = "Bounded program synthesizer by example")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize a program from a grammar file and an examples file.
    Synthesize {
        #[arg(long)]
        grammar: PathBuf,
        /// Ordered, comma-separated argument value-type names.
        #[arg(long, value_delimiter = ',')]
        args: Vec<String>,
        #[arg(long)]
        ret: String,
        #[arg(long)]
        examples: PathBuf,
        #[arg(long, default_value_t = 4)]
        depth: usize,
        #[arg(long = "loc-max", default_value_t = 10)]
        loc_max: usize,
        #[arg(long = "timeout-ms")]
        timeout_ms: Option<u64>,
    },
    /// Run one of the worked demo problems shipped with this crate.
    Demo {
        subdomain: String,
        problem: String,
        #[arg(long, default_value_t = 4)]
        depth: usize,
        #[arg(long = "loc-max", default_value_t = 10)]
        loc_max: usize,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Synthesize { grammar, args, ret, examples, depth, loc_max, timeout_ms } => {
            let grammar_text = match std::fs::read_to_string(&grammar) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("error: could not read grammar file {}: {err}", grammar.display());
                    return ExitCode::from(EXIT_GRAMMAR_OR_SIGNATURE_ERROR);
                }
            };
            let examples_text = match std::fs::read_to_string(&examples) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("error: could not read examples file {}: {err}", examples.display());
                    return ExitCode::from(EXIT_GRAMMAR_OR_SIGNATURE_ERROR);
                }
            };
            let examples = match parse_examples(&examples_text) {
                Ok(examples) => examples,
                Err(err) => {
                    eprintln!("error: malformed examples file: {err}");
                    return ExitCode::from(EXIT_GRAMMAR_OR_SIGNATURE_ERROR);
                }
            };

            run(&grammar_text, "cli_program", &args, &ret, &examples, depth, loc_max, timeout_ms)
        }
        Command::Demo { subdomain, problem, depth, loc_max } => {
            let Some((arg_types, ret_type, examples)) = progsynth::demos::dataset::problem(&subdomain, &problem)
            else {
                eprintln!("error: no such demo problem `{subdomain}/{problem}`");
                return ExitCode::from(EXIT_GRAMMAR_OR_SIGNATURE_ERROR);
            };
            let arg_types: Vec<String> = arg_types.iter().map(|s| s.to_string()).collect();
            run(progsynth::demos::GRAMMAR, &problem, &arg_types, ret_type, &examples, depth, loc_max, None)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run(
    grammar_text: &str,
    program_name: &str,
    arg_types: &[String],
    ret_type: &str,
    examples: &[progsynth::Example],
    depth: usize,
    loc_max: usize,
    timeout_ms: Option<u64>,
) -> ExitCode {
    let spec = match assemble_from_grammar(grammar_text, program_name, arg_types, ret_type) {
        Ok(spec) => spec,
        Err(err @ progsynth::SynthError::Grammar(_)) | Err(err @ progsynth::SynthError::Assembly(_)) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_GRAMMAR_OR_SIGNATURE_ERROR);
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_INTERNAL_ERROR);
        }
    };

    let deadline = timeout_ms.map(|ms| Deadline::after(Duration::from_millis(ms)));
    let bounds = SearchBounds { loc_max, depth_max: depth };
    let synthesizer = Synthesizer::new(&spec);

    match synthesizer.synthesize(examples, bounds, deadline) {
        Ok(Ok(program)) => {
            println!("found: {}", program.readable(&spec));
            let _ = progsynth::print::print_tree(&spec, &program);
            ExitCode::SUCCESS
        }
        Ok(Err(SynthesisOutcome::NotFound)) => {
            println!("not found within depth={depth}, loc_max={loc_max}");
            ExitCode::SUCCESS
        }
        Ok(Err(SynthesisOutcome::TimedOut)) => {
            println!("not found: deadline expired");
            ExitCode::SUCCESS
        }
        Err(err @ progsynth::SynthError::Grammar(_)) | Err(err @ progsynth::SynthError::Assembly(_)) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_GRAMMAR_OR_SIGNATURE_ERROR)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_INTERNAL_ERROR)
        }
    }
}
