//! Convenient imports for typical `sqltpl` usage.
//!
//! ```ignore
//! use sqltpl::prelude::*;
//! ```

pub use crate::{
    Specifier, Template, TplError, TplResult, Value, ValueKind, build_query, skip, template,
};
