//! Core template binder: scanner/dispatcher, value converters, identifier
//! quoting, list expansion and conditional-block elision.
//!
//! The backend-specific string-escaping primitive enters through the
//! [`LiteralEscaper`] trait; `sqlbind-mysql` ships the MySQL-flavored
//! implementation.

pub mod binder;
pub mod convert;
pub mod error;
pub mod expand;
pub mod ident;
#[macro_use]
pub mod macros;
pub mod tracing;
pub mod traits;
pub mod value;

// Re-export key types and traits
pub use binder::Binder;
pub use error::{BindError, Result};
pub use traits::LiteralEscaper;
pub use value::Value;

// Re-exported for the `fields!` macro expansion
#[doc(hidden)]
pub use indexmap;
