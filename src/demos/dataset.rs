//! Worked subdomains and their example sets, ported from the reference
//! implementation's demo dataset. Each subdomain pins a program signature
//! and a handful of named problems with the examples that identify them.

use crate::decider::Example;
use crate::value::Value;

/// A program signature plus the named problems posed against it.
pub struct Subdomain {
    pub arg_types: &'static [&'static str],
    pub output_type: &'static str,
    pub problems: Vec<(&'static str, Vec<Example>)>,
}

fn bool_bool() -> Subdomain {
    Subdomain {
        arg_types: &["Bool"],
        output_type: "Bool",
        problems: vec![(
            "const_false",
            vec![
                Example::new(vec![Value::Bool(true)], Value::Bool(false)),
                Example::new(vec![Value::Bool(false)], Value::Bool(false)),
            ],
        )],
    }
}

fn bool2_bool() -> Subdomain {
    Subdomain {
        arg_types: &["Bool", "Bool"],
        output_type: "Bool",
        problems: vec![
            (
                "nand",
                vec![
                    Example::new(vec![Value::Bool(true), Value::Bool(true)], Value::Bool(false)),
                    Example::new(vec![Value::Bool(true), Value::Bool(false)], Value::Bool(true)),
                    Example::new(vec![Value::Bool(false), Value::Bool(true)], Value::Bool(true)),
                    Example::new(vec![Value::Bool(false), Value::Bool(false)], Value::Bool(true)),
                ],
            ),
            (
                "and",
                vec![
                    Example::new(vec![Value::Bool(true), Value::Bool(true)], Value::Bool(true)),
                    Example::new(vec![Value::Bool(true), Value::Bool(false)], Value::Bool(false)),
                    Example::new(vec![Value::Bool(false), Value::Bool(true)], Value::Bool(false)),
                    Example::new(vec![Value::Bool(false), Value::Bool(false)], Value::Bool(false)),
                ],
            ),
        ],
    }
}

fn int2_int() -> Subdomain {
    Subdomain {
        arg_types: &["Int", "Int"],
        output_type: "Int",
        problems: vec![(
            "plus",
            vec![
                Example::new(vec![Value::Int(0), Value::Int(0)], Value::Int(0)),
                Example::new(vec![Value::Int(1), Value::Int(1)], Value::Int(2)),
                Example::new(vec![Value::Int(10), Value::Int(3)], Value::Int(13)),
            ],
        )],
    }
}

fn str_str() -> Subdomain {
    Subdomain {
        arg_types: &["Str"],
        output_type: "Str",
        problems: vec![
            ("identity", vec![Example::new(vec![Value::Str("a".into())], Value::Str("a".into()))]),
            (
                "prepend_apple",
                vec![Example::new(vec![Value::Str("a".into())], Value::Str("_apple_a".into()))],
            ),
        ],
    }
}

fn str2_str() -> Subdomain {
    Subdomain {
        arg_types: &["Str", "Str"],
        output_type: "Str",
        problems: vec![(
            "demo_string_enumerator",
            vec![Example::new(
                vec![Value::Str("a".into()), Value::Str("b".into())],
                Value::Str("a_apple_b".into()),
            )],
        )],
    }
}

fn list2_int() -> Subdomain {
    Subdomain {
        arg_types: &["List", "List"],
        output_type: "Int",
        problems: vec![
            (
                "deepcoder_demo",
                vec![Example::new(
                    vec![Value::Seq(vec![6, 2, 4, 7, 9]), Value::Seq(vec![5, 3, 6, 1, 0])],
                    Value::Int(27),
                )],
            ),
            (
                "head_plus",
                vec![
                    Example::new(vec![Value::Seq(vec![6]), Value::Seq(vec![5])], Value::Int(11)),
                    Example::new(vec![Value::Seq(vec![2]), Value::Seq(vec![3])], Value::Int(5)),
                    Example::new(vec![Value::Seq(vec![4]), Value::Seq(vec![6])], Value::Int(10)),
                ],
            ),
        ],
    }
}

/// All worked subdomains, in a fixed, documentation-friendly order.
pub fn subdomains() -> Vec<(&'static str, Subdomain)> {
    vec![
        ("bool_bool", bool_bool()),
        ("bool2_bool", bool2_bool()),
        ("int2_int", int2_int()),
        ("str_str", str_str()),
        ("str2_str", str2_str()),
        ("list2_int", list2_int()),
    ]
}

/// Look up a single named problem within a subdomain.
pub fn problem(subdomain: &str, name: &str) -> Option<(&'static [&'static str], &'static str, Vec<Example>)> {
    subdomains().into_iter().find(|(key, _)| *key == subdomain).and_then(|(_, domain)| {
        domain
            .problems
            .iter()
            .find(|(problem_name, _)| *problem_name == name)
            .map(|(_, examples)| (domain.arg_types, domain.output_type, examples.clone()))
    })
}
