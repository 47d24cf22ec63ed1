//! The template scanner/dispatcher.

use crate::convert::{float_literal, integer_literal, null_literal, string_text};
use crate::error::{BindError, Result};
use crate::expand::{expand_identifiers, expand_values};
use crate::traits::LiteralEscaper;
use crate::value::Value;

/// Marker character opening a placeholder.
const MARKER: char = '?';

/// The resolved type of one placeholder, explicit or inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceholderType {
    String,
    Integer,
    Float,
    Null,
    ValueList,
    IdentifierList,
}

impl PlaceholderType {
    fn from_specifier(ch: char) -> Option<Self> {
        match ch {
            's' => Some(Self::String),
            'd' => Some(Self::Integer),
            'f' => Some(Self::Float),
            'n' => Some(Self::Null),
            'a' => Some(Self::ValueList),
            '#' => Some(Self::IdentifierList),
            _ => None,
        }
    }
}

static NULL_VALUE: Value<'static> = Value::Null;

/// Compiles a parameterized template plus an ordered value list into a
/// fully-literal query string.
///
/// Each `?` marker consumes exactly one value, in document order. The
/// substituted output is assembled into a fresh buffer; inserted fragments
/// are never re-scanned, so a value containing `?` or brackets cannot
/// trigger further substitution.
#[derive(Debug, Clone)]
pub struct Binder<E> {
    escaper: E,
}

impl<E: LiteralEscaper> Binder<E> {
    pub const fn new(escaper: E) -> Self {
        Self { escaper }
    }

    /// Compile `template` against `values`.
    ///
    /// Markers past the end of the queue bind null; surplus values are
    /// ignored. Template-originated `{`/`}` characters never reach the
    /// output: conditional blocks are deleted wholesale when the skip
    /// sentinel is consumed, leftover brackets are dropped.
    pub fn compile(&self, template: &str, values: &[Value<'_>]) -> Result<String> {
        crate::sqlbind_trace_compile!(template, values.len());

        let mut out = String::with_capacity(template.len());
        let mut next_value = 0usize;
        let mut chars = template.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                // Inert brackets are stripped as part of the scan
                '{' | '}' => {}
                MARKER => {
                    let value = values.get(next_value).unwrap_or(&NULL_VALUE);
                    next_value += 1;

                    if value.is_skip() {
                        return self.elide_and_restart(template, values);
                    }

                    let explicit = chars
                        .peek()
                        .copied()
                        .and_then(PlaceholderType::from_specifier);
                    if explicit.is_some() {
                        chars.next();
                    }

                    let ty = if value.is_null() {
                        // Null always wins, even over an explicit specifier
                        PlaceholderType::Null
                    } else if let Some(ty) = explicit {
                        ty
                    } else {
                        self.infer_type(value, template)?
                    };

                    self.dispatch(ty, value, template, &mut out)?;
                }
                _ => out.push(ch),
            }
        }

        Ok(out)
    }

    /// Infer a bare marker's type from its value. Containers and the skip
    /// sentinel have no scalar rendering and fail fast instead of
    /// desynchronizing the marker/value pairing.
    fn infer_type(&self, value: &Value<'_>, template: &str) -> Result<PlaceholderType> {
        match value {
            Value::Str(_) | Value::Bool(_) => Ok(PlaceholderType::String),
            Value::Int(_) => Ok(PlaceholderType::Integer),
            Value::Float(_) => Ok(PlaceholderType::Float),
            Value::Null => Ok(PlaceholderType::Null),
            other => Err(BindError::TypeMismatch {
                expected: "scalar",
                actual: other.kind(),
                template: template.to_string(),
            }),
        }
    }

    fn dispatch(
        &self,
        ty: PlaceholderType,
        value: &Value<'_>,
        template: &str,
        out: &mut String,
    ) -> Result<()> {
        match ty {
            PlaceholderType::String => {
                let text = string_text(value, template)?;
                self.escaper.write_quoted(&text, out);
            }
            PlaceholderType::Integer => out.push_str(&integer_literal(value, template)?),
            PlaceholderType::Float => out.push_str(&float_literal(value, template)?),
            PlaceholderType::Null => out.push_str(null_literal()),
            PlaceholderType::ValueList => {
                out.push_str(&expand_values(value, &self.escaper, template)?)
            }
            PlaceholderType::IdentifierList => {
                out.push_str(&expand_identifiers(value, template)?)
            }
        }
        Ok(())
    }

    /// A consumed skip sentinel deletes every conditional block, then the
    /// whole compilation restarts on the reduced template with the
    /// sentinels filtered out. Block removal shifts downstream offsets
    /// arbitrarily, so a fresh pass is simpler and safer than resuming.
    fn elide_and_restart(&self, template: &str, values: &[Value<'_>]) -> Result<String> {
        let (reduced, removed) = strip_blocks(template);
        crate::sqlbind_trace_elide!(removed);

        let kept: Vec<Value<'_>> = values
            .iter()
            .filter(|value| !value.is_skip())
            .cloned()
            .collect();

        // The reduced inputs contain no sentinel, so this recurses at most once
        self.compile(&reduced, &kept)
    }
}

/// Delete every `{…}` block, innermost-first, returning the reduced
/// template and the number of blocks removed. A `}` with no preceding `{`
/// is dropped on its own.
fn strip_blocks(template: &str) -> (String, usize) {
    // Brackets are ASCII, so byte-offset surgery stays UTF-8 safe
    let mut text = template.to_string();
    let mut removed = 0usize;

    while let Some(close) = text.find('}') {
        match text[..close].rfind('{') {
            Some(open) => {
                text.replace_range(open..=close, "");
                removed += 1;
            }
            None => {
                text.remove(close);
            }
        }
    }

    (text, removed)
}
