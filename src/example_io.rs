//! JSON encoding for [`Example`]s, the CLI's file contract: a small tagged
//! shape mirroring [`Value`], deserialized with `serde_json`.

use crate::decider::Example;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExampleIoError {
    #[error("a function value cannot appear in an example record")]
    FunctionValueNotRepresentable,
}

/// The JSON-facing mirror of [`Value`]. `Fun` has no literal surface syntax
/// and is deliberately absent: examples carry data, not first-class
/// functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ValueJson {
    Int(i64),
    Bool(bool),
    Str(String),
    Seq(Vec<i64>),
}

impl From<ValueJson> for Value {
    fn from(json: ValueJson) -> Self {
        match json {
            ValueJson::Int(i) => Value::Int(i),
            ValueJson::Bool(b) => Value::Bool(b),
            ValueJson::Str(s) => Value::Str(s),
            ValueJson::Seq(s) => Value::Seq(s),
        }
    }
}

impl TryFrom<Value> for ValueJson {
    type Error = ExampleIoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(ValueJson::Int(i)),
            Value::Bool(b) => Ok(ValueJson::Bool(b)),
            Value::Str(s) => Ok(ValueJson::Str(s)),
            Value::Seq(s) => Ok(ValueJson::Seq(s)),
            Value::Fun(_) => Err(ExampleIoError::FunctionValueNotRepresentable),
        }
    }
}

/// One example record as it appears in an `--examples` JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub input: Vec<ValueJson>,
    pub output: ValueJson,
}

impl From<ExampleRecord> for Example {
    fn from(record: ExampleRecord) -> Self {
        Example::new(
            record.input.into_iter().map(Value::from).collect(),
            Value::from(record.output),
        )
    }
}

/// Parse a JSON array of [`ExampleRecord`]s into [`Example`]s.
pub fn parse_examples(json: &str) -> Result<Vec<Example>, serde_json::Error> {
    let records: Vec<ExampleRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Example::from).collect())
}
