//! # sqltpl
//!
//! A typed-placeholder SQL query templating engine.
//!
//! `sqltpl` turns a template string and an ordered argument list into a
//! final SQL string. It never touches a database: connections and execution
//! belong to the caller.
//!
//! ## Features
//!
//! - **Typed placeholders**: `?d` (integer), `?f` (float), `?a` (array/set),
//!   `?#` (identifier), bare `?` (quoted literal)
//! - **In-order binding**: placeholders consume arguments strictly left to
//!   right, no index bookkeeping
//! - **One optional block**: a `{...}` region is kept (delimiters stripped)
//!   or dropped entirely when the [`skip`] sentinel is bound inside it
//! - **Stateless**: every build is a pure transformation; concurrent builds
//!   need no coordination
//!
//! ## Example
//!
//! ```ignore
//! use sqltpl::{Value, build_query, skip};
//!
//! // Block kept: the filter value is real.
//! let q = build_query(
//!     "SELECT name FROM users WHERE group = ?d {AND city = ?}",
//!     &[Value::from(3), Value::from("Oslo")],
//! )?;
//! assert_eq!(q, "SELECT name FROM users WHERE group = 3 AND city = 'Oslo'");
//!
//! // Block dropped: the caller binds the sentinel instead.
//! let q = build_query(
//!     "SELECT name FROM users WHERE group = ?d {AND city = ?}",
//!     &[Value::from(3), skip()],
//! )?;
//! assert_eq!(q, "SELECT name FROM users WHERE group = 3");
//! # Ok::<(), sqltpl::TplError>(())
//! ```
//!
//! Enable the `tracing` cargo feature to emit a debug event for each
//! successfully built query.

pub mod block;
pub mod error;
pub mod format;
pub mod query;
pub mod scan;
pub mod value;

pub mod prelude;

pub use error::{TplError, TplResult};
pub use format::{Specifier, format_value};
pub use query::{Template, build_query, template};
pub use value::{Value, ValueKind, skip};
