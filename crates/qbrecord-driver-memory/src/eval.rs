use crate::{table, table::Record, unsupported};

use qbrecord_core::{
    schema::{Fid, FieldKind},
    Error, Result, TableSchema,
};
use qbrecord_query::parse::{Clause, FieldRef};
use serde_json::Value as Json;
use std::cmp::Ordering;

/// True if `record` satisfies one query clause.
pub(crate) fn matches(clause: &Clause, record: &Record, schema: Option<&TableSchema>) -> Result<bool> {
    let fid = match &clause.field {
        FieldRef::Fid(fid) => *fid,
        FieldRef::Name(name) => {
            return Err(Error::invalid_argument(format!(
                "query field `{name}` is not a FID"
            )))
        }
    };

    let actual = record.get(&fid).map(text).unwrap_or_default();
    let expected = operand(fid, &clause.value, schema);

    Ok(match clause.comparator.as_str() {
        "EX" => equals(&actual, &expected),
        "XEX" => !equals(&actual, &expected),
        "CT" => contains(&actual, &expected),
        "XCT" => !contains(&actual, &expected),
        "SW" => starts_with(&actual, &expected),
        "XSW" => !starts_with(&actual, &expected),
        "LT" => !actual.is_empty() && compare(&actual, &expected) == Ordering::Less,
        "LTE" => !actual.is_empty() && compare(&actual, &expected) != Ordering::Greater,
        "GT" => !actual.is_empty() && compare(&actual, &expected) == Ordering::Greater,
        "GTE" => !actual.is_empty() && compare(&actual, &expected) != Ordering::Less,
        other => return Err(unsupported(format!("comparator `{other}` is not supported"))),
    })
}

/// Text form of a stored value, as the service compares it.
pub(crate) fn text(value: &Json) -> String {
    match value {
        Json::Null => String::new(),
        Json::String(v) => v.clone(),
        Json::Object(map) => match map.get("filename") {
            Some(Json::String(filename)) => filename.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Numbers compare numerically, everything else case-insensitively.
pub(crate) fn compare(lhs: &str, rhs: &str) -> Ordering {
    match (lhs.trim().parse::<f64>(), rhs.trim().parse::<f64>()) {
        (Ok(lhs), Ok(rhs)) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
        _ => lhs.to_lowercase().cmp(&rhs.to_lowercase()),
    }
}

fn operand(fid: Fid, value: &str, schema: Option<&TableSchema>) -> String {
    let is_date = schema
        .and_then(|schema| schema.field_for_fid(fid).ok())
        .is_some_and(|field| field.kind == FieldKind::Date);

    match is_date.then(|| table::date_millis(value)).flatten() {
        Some(millis) => millis.to_string(),
        None => value.to_string(),
    }
}

fn equals(actual: &str, expected: &str) -> bool {
    compare(actual, expected) == Ordering::Equal
}

fn contains(actual: &str, expected: &str) -> bool {
    actual.to_lowercase().contains(&expected.to_lowercase())
}

fn starts_with(actual: &str, expected: &str) -> bool {
    actual.to_lowercase().starts_with(&expected.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(compare("10", "9"), Ordering::Greater);
        assert_eq!(compare("1.0", "1"), Ordering::Equal);
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn text_of_stored_values() {
        assert_eq!(text(&Json::Null), "");
        assert_eq!(text(&Json::from(12)), "12");
        assert_eq!(text(&Json::Bool(true)), "true");
        assert_eq!(
            text(&serde_json::json!({"filename": "resume.pdf"})),
            "resume.pdf"
        );
    }
}
