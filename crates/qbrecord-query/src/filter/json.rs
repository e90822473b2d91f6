//! Filters written as JSON: a string is a raw query, an object maps field
//! names to conditions, and an array of objects is a disjunction.

use super::{Comparator, Comparison, Condition, Conditions, Filter, Operand};
use qbrecord_core::{Error, Result, Value};

use serde_json::{Map, Value as Json};

impl TryFrom<Json> for Filter {
    type Error = Error;

    fn try_from(json: Json) -> Result<Filter> {
        match json {
            Json::String(query) => Ok(Filter::Raw(query)),
            Json::Object(map) => conditions(map).map(Filter::And),
            Json::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Json::Object(map) => conditions(map),
                    other => Err(Error::invalid_argument(format!(
                        "filter list entries must be objects, got {}",
                        json_type(&other)
                    ))),
                })
                .collect::<Result<_>>()
                .map(Filter::AnyOf),
            other => Err(Error::invalid_argument(format!(
                "filter must be a string, an object or a list of objects, got {}",
                json_type(&other)
            ))),
        }
    }
}

fn conditions(map: Map<String, Json>) -> Result<Conditions> {
    map.into_iter()
        .map(|(name, json)| {
            let condition = condition(&name, json)?;
            Ok((name, condition))
        })
        .collect()
}

fn condition(name: &str, json: Json) -> Result<Condition> {
    match json {
        Json::Array(items) => list(name, items).map(Condition::In),
        Json::Object(map) => {
            let mut comparison = Comparison::new();

            for (comparator, json) in map {
                let operand = match json {
                    Json::Array(items) => Operand::Many(list(name, items)?),
                    other => Operand::One(scalar(name, other)?),
                };
                comparison.ops.push((Comparator::from(comparator), operand));
            }

            Ok(Condition::Compare(comparison))
        }
        other => scalar(name, other).map(Condition::Eq),
    }
}

fn list(name: &str, items: Vec<Json>) -> Result<Vec<Value>> {
    items.into_iter().map(|item| scalar(name, item)).collect()
}

fn scalar(name: &str, json: Json) -> Result<Value> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(v) => Value::Bool(v),
        Json::String(v) => Value::String(v),
        Json::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(v), _) => Value::I64(v),
            // Too large for i64; keep every digit
            (None, Some(v)) => Value::String(v.to_string()),
            (None, None) => match n.as_f64() {
                Some(v) => Value::F64(v),
                None => Value::String(n.to_string()),
            },
        },
        other => {
            return Err(Error::invalid_argument(format!(
                "value for `{name}` must be a scalar, got {}",
                json_type(&other)
            )))
        }
    })
}

fn json_type(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "a list",
        Json::Object(_) => "an object",
    }
}
