use std::borrow::Cow;

use indexmap::IndexMap;

/// A dynamically-typed parameter value paired with a placeholder marker.
///
/// Borrows string data where possible; insertion order of [`Value::Map`]
/// entries is preserved because it is semantic for `?a` expansion.
///
/// [`Value::Skip`] is the omit sentinel: consuming it deletes every
/// conditional `{…}` block from the template instead of substituting a
/// literal. It is a dedicated variant so caller data can never collide
/// with it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Cow<'a, str>),
    Array(Vec<Value<'a>>),
    Map(IndexMap<Cow<'a, str>, Value<'a>>),
    Skip,
}

impl<'a> Value<'a> {
    /// The omit sentinel. Pass in place of a real value to delete the
    /// conditional block(s) of the template.
    pub const fn skip() -> Self {
        Value::Skip
    }

    /// Kind name used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Skip => "skip",
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_skip(&self) -> bool {
        matches!(self, Value::Skip)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Str(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(value: Vec<Value<'a>>) -> Self {
        Value::Array(value)
    }
}

impl<'a> From<IndexMap<Cow<'a, str>, Value<'a>>> for Value<'a> {
    fn from(value: IndexMap<Cow<'a, str>, Value<'a>>) -> Self {
        Value::Map(value)
    }
}
