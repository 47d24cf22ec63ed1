//! # sqlbind
//!
//! A client-side SQL template binder: compiles a parameterized template
//! plus an ordered list of values into a single, fully-literal query
//! string, with every placeholder replaced by a correctly escaped,
//! correctly typed SQL literal or identifier.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlbind::prelude::*;
//!
//! # fn main() -> sqlbind::Result<()> {
//! let sql = build_query(
//!     "SELECT * FROM users WHERE name = ? {AND block = ?d}",
//!     &values!["O'Brien", Value::skip()],
//! )?;
//! assert_eq!(sql, "SELECT * FROM users WHERE name = 'O\\'Brien' ");
//! # Ok(())
//! # }
//! ```
//!
//! ## Placeholder types
//!
//! | Specifier | Meaning              | Example output          |
//! |-----------|----------------------|-------------------------|
//! | `?d`      | integer literal      | `42`                    |
//! | `?s`      | quoted string        | `'x'`                   |
//! | `?f`      | float literal        | `1.5`                   |
//! | `?n`      | `NULL`               | `NULL`                  |
//! | `?a`      | value list           | `` `a` = 1, `b` = 'x' ``|
//! | `?#`      | identifier list      | `` `a`, `b` ``          |
//! | `?`       | inferred from value  |                         |

pub use sqlbind_core::{BindError, Binder, LiteralEscaper, Result, Value};
pub use sqlbind_core::{fields, values};

pub use sqlbind_core as core;

#[cfg(feature = "mysql")]
pub use sqlbind_mysql as mysql;

#[cfg(feature = "mysql")]
pub use sqlbind_mysql::{MySqlEscaper, build_query};

pub mod prelude {
    pub use sqlbind_core::{BindError, Binder, LiteralEscaper, Result, Value};
    pub use sqlbind_core::{fields, values};

    #[cfg(feature = "mysql")]
    pub use sqlbind_mysql::{MySqlEscaper, build_query};
}
