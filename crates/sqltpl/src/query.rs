//! Building queries from templates.

use crate::block;
use crate::error::TplResult;
use crate::scan;
use crate::value::Value;

/// Build a query from a template and an ordered argument list.
///
/// Placeholders are bound to arguments left to right; the lists must have
/// equal length. After substitution the single optional `{...}` block is
/// resolved: removed entirely when the [`skip`](crate::skip) sentinel was
/// bound inside it, delimiter-stripped otherwise.
///
/// # Example
///
/// ```ignore
/// use sqltpl::{Value, build_query, skip};
///
/// let q = build_query(
///     "SELECT * FROM users WHERE id = ?d {AND status = ?}",
///     &[Value::from(42), skip()],
/// )?;
/// assert_eq!(q, "SELECT * FROM users WHERE id = 42");
/// # Ok::<(), sqltpl::TplError>(())
/// ```
pub fn build_query(template: &str, args: &[Value]) -> TplResult<String> {
    let substituted = scan::substitute(template, args)?;
    let query = block::resolve(&substituted)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(template, query = %query, "built SQL query");

    Ok(query)
}

/// A reusable query template.
///
/// Thin wrapper over [`build_query`] for templates that are bound more than
/// once:
///
/// ```ignore
/// use sqltpl::{Value, template};
///
/// let by_id = template("SELECT * FROM users WHERE id = ?d");
/// let q = by_id.build(&[Value::from(7)])?;
/// # Ok::<(), sqltpl::TplError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    template: String,
}

/// Create a reusable [`Template`].
pub fn template(template: impl Into<String>) -> Template {
    Template::new(template)
}

impl Template {
    /// Create a template from its source string.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The template source.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Build the query for one argument list.
    pub fn build(&self, args: &[Value]) -> TplResult<String> {
        build_query(&self.template, args)
    }
}
