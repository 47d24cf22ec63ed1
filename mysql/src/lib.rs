//! MySQL-flavored literal escaping for the template binder.

use sqlbind_core::{Binder, LiteralEscaper, Result, Value};

/// Client-side equivalent of `mysql_real_escape_string`, wrapping the
/// result in single quotes.
///
/// Escapes the characters the libmysql escape table handles: NUL, single
/// and double quote, backslash, newline, carriage return and Ctrl-Z.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlEscaper;

impl LiteralEscaper for MySqlEscaper {
    fn write_quoted(&self, raw: &str, out: &mut String) {
        out.push('\'');
        for ch in raw.chars() {
            match ch {
                '\0' => out.push_str("\\0"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\u{1a}' => out.push_str("\\Z"),
                _ => out.push(ch),
            }
        }
        out.push('\'');
    }
}

/// One-shot compilation against the MySQL escaper.
///
/// ```
/// use sqlbind_core::values;
///
/// let sql = sqlbind_mysql::build_query(
///     "SELECT * FROM users WHERE id = ?d",
///     &values![5],
/// )?;
/// assert_eq!(sql, "SELECT * FROM users WHERE id = 5");
/// # Ok::<(), sqlbind_core::BindError>(())
/// ```
pub fn build_query(template: &str, values: &[Value<'_>]) -> Result<String> {
    Binder::new(MySqlEscaper).compile(template, values)
}
