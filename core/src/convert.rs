//! Scalar value-to-literal converters for the `s`, `d`, `f` and `n`
//! placeholder types.
//!
//! Numeric shape recognition is uniform over native numbers and
//! numeral-valued strings: `"42"` binds to a `?d` placeholder the same way
//! `42` does, keeping its exact text (sign and leading zeros included).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BindError, Result};
use crate::value::Value;

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]+\.[0-9]*|\.[0-9]+)$").unwrap());

/// Whether `value` is integer-shaped: a native integer, or a non-boolean
/// scalar whose text is an optional sign followed by decimal digits.
pub fn is_integer_shaped(value: &Value<'_>) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Str(text) => INTEGER_RE.is_match(text),
        _ => false,
    }
}

/// Whether `value` is float-shaped: a native float, or a scalar whose text
/// carries a mandatory decimal point with digits on at least one side.
pub fn is_float_shaped(value: &Value<'_>) -> bool {
    match value {
        Value::Float(_) => true,
        Value::Str(text) => FLOAT_RE.is_match(text),
        _ => false,
    }
}

/// Raw text for an `s` placeholder, before escaping and quoting.
///
/// Booleans render as `0`/`1`, numbers as their textual form, null as the
/// empty string. The dispatcher routes `Null` to the null converter first,
/// so the empty-string case is only reachable on a direct call.
pub fn string_text<'v>(value: &'v Value<'_>, template: &str) -> Result<Cow<'v, str>> {
    match value {
        Value::Bool(true) => Ok(Cow::Borrowed("1")),
        Value::Bool(false) => Ok(Cow::Borrowed("0")),
        Value::Int(int) => Ok(Cow::Owned(int.to_string())),
        Value::Float(float) => Ok(Cow::Owned(float.to_string())),
        Value::Str(text) => Ok(Cow::Borrowed(text.as_ref())),
        Value::Null => Ok(Cow::Borrowed("")),
        other => Err(BindError::TypeMismatch {
            expected: "string",
            actual: other.kind(),
            template: template.to_string(),
        }),
    }
}

/// Literal for a `d` placeholder.
///
/// Integer-shaped values pass through verbatim; float-shaped and boolean
/// values truncate toward zero; null renders as `0`.
pub fn integer_literal(value: &Value<'_>, template: &str) -> Result<String> {
    match value {
        Value::Null => Ok("0".into()),
        Value::Int(int) => Ok(int.to_string()),
        Value::Bool(flag) => Ok(i64::from(*flag).to_string()),
        Value::Float(float) => Ok((*float as i64).to_string()),
        Value::Str(text) if is_integer_shaped(value) => Ok(text.to_string()),
        Value::Str(text) if is_float_shaped(value) => {
            // The float pattern guarantees the text parses
            let float: f64 = text.parse().unwrap_or_default();
            Ok((float as i64).to_string())
        }
        other => Err(BindError::TypeMismatch {
            expected: "integer",
            actual: other.kind(),
            template: template.to_string(),
        }),
    }
}

/// Literal for an `f` placeholder.
///
/// Float-shaped values pass through (a float-shaped string keeps its exact
/// text); integer-shaped, null and boolean values convert through `f64`.
pub fn float_literal(value: &Value<'_>, template: &str) -> Result<String> {
    match value {
        Value::Float(float) => Ok(float.to_string()),
        Value::Null => Ok(0f64.to_string()),
        Value::Bool(flag) => Ok(f64::from(u8::from(*flag)).to_string()),
        Value::Int(int) => Ok((*int as f64).to_string()),
        Value::Str(text) if is_float_shaped(value) => Ok(text.to_string()),
        Value::Str(text) if is_integer_shaped(value) => {
            let float: f64 = text.parse().unwrap_or_default();
            Ok(float.to_string())
        }
        other => Err(BindError::TypeMismatch {
            expected: "float",
            actual: other.kind(),
            template: template.to_string(),
        }),
    }
}

/// Literal for an `n` placeholder. The paired value is ignored entirely.
pub const fn null_literal() -> &'static str {
    "NULL"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_shapes() {
        assert!(is_integer_shaped(&Value::Int(5)));
        assert!(is_integer_shaped(&Value::from("42")));
        assert!(is_integer_shaped(&Value::from("-007")));
        assert!(is_integer_shaped(&Value::from("+13")));
        assert!(!is_integer_shaped(&Value::from("1.5")));
        assert!(!is_integer_shaped(&Value::from("1e3")));
        assert!(!is_integer_shaped(&Value::from("++1")));
        assert!(!is_integer_shaped(&Value::Bool(true)));
    }

    #[test]
    fn float_shapes() {
        assert!(is_float_shaped(&Value::Float(1.5)));
        assert!(is_float_shaped(&Value::from("1.5")));
        assert!(is_float_shaped(&Value::from("-.5")));
        assert!(is_float_shaped(&Value::from("3.")));
        assert!(!is_float_shaped(&Value::from("3")));
        assert!(!is_float_shaped(&Value::from("1.5.2")));
        assert!(!is_float_shaped(&Value::from("+-1.0")));
    }

    #[test]
    fn string_conversion() {
        let t = "q";
        assert_eq!(string_text(&Value::Bool(true), t).unwrap(), "1");
        assert_eq!(string_text(&Value::Bool(false), t).unwrap(), "0");
        assert_eq!(string_text(&Value::Int(7), t).unwrap(), "7");
        assert_eq!(string_text(&Value::Float(2.5), t).unwrap(), "2.5");
        assert_eq!(string_text(&Value::from("abc"), t).unwrap(), "abc");
        assert_eq!(string_text(&Value::Null, t).unwrap(), "");

        let err = string_text(&Value::Array(vec![]), t).unwrap_err();
        assert_eq!(
            err,
            BindError::TypeMismatch {
                expected: "string",
                actual: "array",
                template: "q".into(),
            }
        );
    }

    #[test]
    fn integer_conversion() {
        let t = "q";
        assert_eq!(integer_literal(&Value::Null, t).unwrap(), "0");
        assert_eq!(integer_literal(&Value::Int(-3), t).unwrap(), "-3");
        // Integer-shaped strings keep their exact text
        assert_eq!(integer_literal(&Value::from("007"), t).unwrap(), "007");
        assert_eq!(integer_literal(&Value::from("+5"), t).unwrap(), "+5");
        // Floats and booleans truncate toward zero
        assert_eq!(integer_literal(&Value::Float(3.9), t).unwrap(), "3");
        assert_eq!(integer_literal(&Value::Float(-3.9), t).unwrap(), "-3");
        assert_eq!(integer_literal(&Value::from("2.7"), t).unwrap(), "2");
        assert_eq!(integer_literal(&Value::Bool(true), t).unwrap(), "1");

        assert!(integer_literal(&Value::from("abc"), t).is_err());
        assert!(integer_literal(&Value::Map(Default::default()), t).is_err());
    }

    #[test]
    fn float_conversion() {
        let t = "q";
        assert_eq!(float_literal(&Value::Float(1.25), t).unwrap(), "1.25");
        // Float-shaped strings keep their exact text
        assert_eq!(float_literal(&Value::from("3.50"), t).unwrap(), "3.50");
        assert_eq!(float_literal(&Value::Int(4), t).unwrap(), "4");
        assert_eq!(float_literal(&Value::from("4"), t).unwrap(), "4");
        assert_eq!(float_literal(&Value::Null, t).unwrap(), "0");
        assert_eq!(float_literal(&Value::Bool(true), t).unwrap(), "1");

        assert!(float_literal(&Value::from("abc"), t).is_err());
        assert!(float_literal(&Value::Array(vec![]), t).is_err());
    }
}
