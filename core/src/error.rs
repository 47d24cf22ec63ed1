use thiserror::Error;

/// Errors raised while compiling a template. Every variant is fatal to the
/// current [`compile`](crate::Binder::compile) call and carries the original
/// template text for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// A typed placeholder received a value incompatible with that type
    #[error("placeholder of type \"{expected}\" received a value of type \"{actual}\" in query template \"{template}\"")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
        template: String,
    },

    /// An `?a` or `?#` placeholder received a non-container value
    #[error("array placeholder received a value of type \"{actual}\" in query template \"{template}\"")]
    InvalidArray {
        actual: &'static str,
        template: String,
    },

    /// An identifier position received a non-textual value
    #[error("identifier placeholder received a value of type \"{actual}\" in query template \"{template}\"")]
    InvalidIdentifier {
        actual: &'static str,
        template: String,
    },

    /// Two or more consecutive `.` characters in a column or table name
    #[error("two consecutive `.` characters in a column or table name in query template \"{template}\"")]
    DoubleDot { template: String },
}

/// Result type for template compilation
pub type Result<T> = std::result::Result<T, BindError>;
