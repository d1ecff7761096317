//! Worked example domains, not part of the synthesis engine proper: a
//! shared grammar text and a handful of named example sets used by the CLI
//! driver's `--demo` mode and by the integration tests.

pub mod dataset;

use crate::value::Value;

/// The grammar text shared by every worked subdomain.
pub const GRAMMAR: &str = include_str!("../../demos/grammar.synth");

/// Representative sample inputs for a program signature, ported from the
/// reference implementation's ad hoc io-set generator. Used to build
/// examples out of a program the caller already has in hand, not to pose
/// new synthesis problems.
pub fn sample_inputs_for(arg_types: &[&str]) -> Result<Vec<Vec<Value>>, String> {
    match arg_types {
        ["Int"] => Ok(vec![0, 1, 2, 4, 9].into_iter().map(|n| vec![Value::Int(n)]).collect()),
        ["Int", "Int"] => Ok([(0, 0), (1, 4), (3, 2), (4, 12), (9, 2)]
            .into_iter()
            .map(|(a, b)| vec![Value::Int(a), Value::Int(b)])
            .collect()),
        ["List"] => Ok(vec![
            vec![Value::Seq(vec![0, 1, 8, 3])],
            vec![Value::Seq(vec![1])],
            vec![Value::Seq(vec![12, 3, 8, 1])],
            vec![Value::Seq(vec![9, 8, 7, 2])],
        ]),
        other => Err(format!("no sample inputs are registered for signature {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_text_carries_the_progspec_placeholder() {
        assert!(GRAMMAR.contains(crate::grammar::PROGSPEC_PLACEHOLDER));
    }

    #[test]
    fn sample_inputs_cover_the_documented_signatures() {
        assert_eq!(sample_inputs_for(&["Int"]).unwrap().len(), 5);
        assert_eq!(sample_inputs_for(&["Int", "Int"]).unwrap().len(), 5);
        assert_eq!(sample_inputs_for(&["List"]).unwrap().len(), 4);
    }

    #[test]
    fn unsupported_signature_is_reported_not_panicked() {
        assert!(sample_inputs_for(&["Bool", "Bool", "Bool"]).is_err());
    }
}
