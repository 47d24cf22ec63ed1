//! Composite expanders for the `a` (value list) and `#` (identifier list)
//! placeholder types.

use smallvec::SmallVec;

use crate::convert::{float_literal, integer_literal, null_literal, string_text};
use crate::error::{BindError, Result};
use crate::ident::{escape_identifier, quote_name};
use crate::traits::LiteralEscaper;
use crate::value::Value;

type Parts = SmallVec<[String; 8]>;

fn join_or_null(parts: Parts) -> String {
    if parts.is_empty() {
        null_literal().to_string()
    } else {
        parts.join(", ")
    }
}

/// Render a single list entry as a scalar literal. Containers and the skip
/// sentinel are rejected rather than silently mangled.
fn entry_literal<E: LiteralEscaper>(
    entry: &Value<'_>,
    escaper: &E,
    template: &str,
) -> Result<String> {
    match entry {
        Value::Str(_) => {
            let text = string_text(entry, template)?;
            Ok(escaper.quoted(&text))
        }
        Value::Int(_) => integer_literal(entry, template),
        Value::Float(_) => float_literal(entry, template),
        // Booleans render quoted, matching their `s`-type conversion
        Value::Bool(_) => {
            let text = string_text(entry, template)?;
            Ok(escaper.quoted(&text))
        }
        Value::Null => Ok(null_literal().to_string()),
        other => Err(BindError::TypeMismatch {
            expected: "scalar",
            actual: other.kind(),
            template: template.to_string(),
        }),
    }
}

/// Expand an `a` placeholder: a comma-joined value list.
///
/// Keyed containers render `` `key` = value `` per entry (keys through the
/// identifier escaper, so dotted keys expand); sequential containers render
/// entries bare. An empty container renders `NULL`.
pub fn expand_values<E: LiteralEscaper>(
    value: &Value<'_>,
    escaper: &E,
    template: &str,
) -> Result<String> {
    let mut parts = Parts::new();

    match value {
        Value::Array(items) => {
            for item in items {
                parts.push(entry_literal(item, escaper, template)?);
            }
        }
        Value::Map(entries) => {
            for (key, item) in entries {
                let rendered = entry_literal(item, escaper, template)?;
                let mut part = quote_name(key, template)?;
                part.push_str(" = ");
                part.push_str(&rendered);
                parts.push(part);
            }
        }
        other => {
            return Err(BindError::InvalidArray {
                actual: other.kind(),
                template: template.to_string(),
            });
        }
    }

    Ok(join_or_null(parts))
}

/// Expand a `#` placeholder: a comma-joined identifier list.
///
/// String entries are backtick-quoted, null entries render `NULL`, anything
/// else is rejected. A keyed container expands its values (keys ignored);
/// a scalar input is quoted directly with no list wrapping.
pub fn expand_identifiers(value: &Value<'_>, template: &str) -> Result<String> {
    fn entry(item: &Value<'_>, template: &str) -> Result<String> {
        match item {
            Value::Null => Ok(null_literal().to_string()),
            other => escape_identifier(other, template),
        }
    }

    let mut parts = Parts::new();

    match value {
        Value::Array(items) => {
            for item in items {
                parts.push(entry(item, template)?);
            }
        }
        Value::Map(entries) => {
            for item in entries.values() {
                parts.push(entry(item, template)?);
            }
        }
        scalar => return escape_identifier(scalar, template),
    }

    Ok(join_or_null(parts))
}
