//! Identifier quoting for `?#` placeholders and `?a` map keys.

use crate::error::{BindError, Result};
use crate::value::Value;

/// Quote a table or column name, dotted compounds included.
///
/// Each non-empty `.`-separated segment is wrapped in backticks with embedded
/// backticks doubled. One empty segment is tolerated across the whole input
/// and renders as a bare `.` (the degenerate two-part compound form); a
/// second one fails with [`BindError::DoubleDot`]. Trailing separators are
/// trimmed, so the empty name renders as the empty string.
pub fn quote_name(raw: &str, template: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut seen_empty = false;

    for segment in raw.split('.') {
        if segment.is_empty() {
            if seen_empty {
                return Err(BindError::DoubleDot {
                    template: template.to_string(),
                });
            }
            seen_empty = true;
            out.push('.');
        } else {
            out.push('`');
            for ch in segment.chars() {
                if ch == '`' {
                    out.push('`');
                }
                out.push(ch);
            }
            out.push_str("`.");
        }
    }

    out.truncate(out.trim_end_matches('.').len());
    Ok(out)
}

/// Quote an identifier supplied as a [`Value`].
///
/// Fails with [`BindError::InvalidIdentifier`] unless the value is textual.
pub fn escape_identifier(value: &Value<'_>, template: &str) -> Result<String> {
    match value {
        Value::Str(text) => quote_name(text, template),
        other => Err(BindError::InvalidIdentifier {
            actual: other.kind(),
            template: template.to_string(),
        }),
    }
}
