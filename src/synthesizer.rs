//! The top-level search loop: grow the location budget one unit at a time,
//! enumerate every well-typed program at that budget, and return the first
//! one the decider accepts.

use crate::decider::{Example, ExampleConstraintDecider};
use crate::enumerator::Enumerator;
use crate::error::SynthError;
use crate::ast::Program;
use crate::spec::Spec;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A wall-clock budget for a single synthesis run.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Self { expires_at: Instant::now() + timeout }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Search parameters shared by a synthesis run.
#[derive(Debug, Clone, Copy)]
pub struct SearchBounds {
    pub loc_max: usize,
    pub depth_max: usize,
}

/// Why a run returned without a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisOutcome {
    /// No well-typed program up to `loc_max`/`depth_max` fits every example.
    NotFound,
    /// The deadline expired before the search space was exhausted.
    TimedOut,
}

pub struct Synthesizer<'s> {
    spec: &'s Spec,
}

impl<'s> Synthesizer<'s> {
    pub fn new(spec: &'s Spec) -> Self {
        Self { spec }
    }

    /// Search `loc` from 0 up to `bounds.loc_max`, re-enumerating from
    /// scratch at each step with a fresh solver context, returning the
    /// first program every example accepts.
    pub fn synthesize(
        &self,
        examples: &[Example],
        bounds: SearchBounds,
        deadline: Option<Deadline>,
    ) -> Result<Result<Program, SynthesisOutcome>, SynthError> {
        let decider = ExampleConstraintDecider::new(examples);

        for loc in 0..=bounds.loc_max {
            if let Some(deadline) = deadline {
                if deadline.expired() {
                    info!(loc, "deadline expired before exhausting the search space");
                    return Ok(Err(SynthesisOutcome::TimedOut));
                }
            }

            let enumerator = Enumerator::new(self.spec, bounds.depth_max);
            let candidates = enumerator.programs_with_loc(loc)?;
            debug!(loc, candidates = candidates.len(), "enumerated candidates at this location budget");

            for candidate in candidates {
                if let Some(deadline) = deadline {
                    if deadline.expired() {
                        info!(loc, "deadline expired mid-loc");
                        return Ok(Err(SynthesisOutcome::TimedOut));
                    }
                }
                if decider.accepts(self.spec, &candidate) {
                    info!(loc, program = %candidate.readable(self.spec), "accepted");
                    return Ok(Ok(candidate));
                }
            }
        }

        info!(loc_max = bounds.loc_max, "no program fits within the search bounds");
        Ok(Err(SynthesisOutcome::NotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ProgramSpec;
    use crate::types::{Type, ValueType};
    use crate::value::Value;

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
    fn finds_plus_from_two_examples() {
        let spec = plus_spec();
        let examples = vec![
            Example::new(vec![Value::Int(1), Value::Int(2)], Value::Int(3)),
            Example::new(vec![Value::Int(4), Value::Int(5)], Value::Int(9)),
        ];
        let synthesizer = Synthesizer::new(&spec);
        let bounds = SearchBounds { loc_max: 2, depth_max: 2 };
        let result = synthesizer.synthesize(&examples, bounds, None).unwrap().unwrap();
        assert_eq!(result.readable(&spec), "plus(@param0, @param1)");
    }

    #[test]
    fn reports_not_found_when_no_program_fits() {
        let spec = plus_spec();
        // No production can ever produce a constant unrelated to the inputs.
        let examples = vec![Example::new(vec![Value::Int(1), Value::Int(2)], Value::Int(1000))];
        let synthesizer = Synthesizer::new(&spec);
        let bounds = SearchBounds { loc_max: 1, depth_max: 1 };
        let outcome = synthesizer.synthesize(&examples, bounds, None).unwrap().unwrap_err();
        assert_eq!(outcome, SynthesisOutcome::NotFound);
    }

    #[test]
    fn an_already_expired_deadline_times_out_immediately() {
        let spec = plus_spec();
        let examples = vec![Example::new(vec![Value::Int(1), Value::Int(2)], Value::Int(3))];
        let synthesizer = Synthesizer::new(&spec);
        let bounds = SearchBounds { loc_max: 4, depth_max: 4 };
        let deadline = Deadline::after(Duration::from_secs(0));
        std::thread::sleep(Duration::from_millis(1));
        let outcome = synthesizer.synthesize(&examples, bounds, Some(deadline)).unwrap().unwrap_err();
        assert_eq!(outcome, SynthesisOutcome::TimedOut);
    }
}
