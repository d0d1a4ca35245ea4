//! Conditional block resolution.
//!
//! After substitution a query may carry at most one `{...}` region. Three
//! terminal outcomes:
//!
//! - no region: the query passes through unchanged
//! - region present, skip marker absent: only the delimiters are removed
//! - region present, skip marker inside: the whole region is removed
//!
//! More than one `{` or more than one `}` is rejected, which covers both
//! nesting and multiple independent regions.

use crate::error::{TplError, TplResult};
use crate::value::SKIP_MARKER;

/// Resolve the conditional block of an already-substituted query.
pub fn resolve(query: &str) -> TplResult<String> {
    if query.matches('{').count() > 1 || query.matches('}').count() > 1 {
        return Err(TplError::NestedConditionalBlock);
    }

    let Some(open) = query.find('{') else {
        return Ok(query.to_string());
    };
    let Some(close) = query[open..].find('}').map(|at| open + at) else {
        // Lone delimiter, or `}` before `{`: no region.
        return Ok(query.to_string());
    };

    if query[open..=close].contains(SKIP_MARKER) {
        // Drop the region together with one adjacent separator space, so
        // `... t {WHERE ...}` resolves to `... t`, not `... t `.
        let rest = &query[close + 1..];
        let (before, after) = match query[..open].strip_suffix(' ') {
            Some(before) => (before, rest),
            None => (&query[..open], rest.strip_prefix(' ').unwrap_or(rest)),
        };
        let mut out = String::with_capacity(before.len() + after.len());
        out.push_str(before);
        out.push_str(after);
        Ok(out)
    } else {
        let mut out = String::with_capacity(query.len() - 2);
        out.push_str(&query[..open]);
        out.push_str(&query[open + 1..close]);
        out.push_str(&query[close + 1..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_delimiters_passes_through() {
        let q = resolve("SELECT * FROM t WHERE id = 5").unwrap();
        assert_eq!(q, "SELECT * FROM t WHERE id = 5");
    }

    #[test]
    fn marker_absent_strips_delimiters() {
        let q = resolve("SELECT * FROM t {WHERE id = 5}").unwrap();
        assert_eq!(q, "SELECT * FROM t WHERE id = 5");
    }

    #[test]
    fn marker_present_removes_the_block() {
        let q = resolve("SELECT * FROM t {WHERE id = 999}").unwrap();
        assert_eq!(q, "SELECT * FROM t");
    }

    #[test]
    fn removal_keeps_text_after_the_block() {
        let q = resolve("SELECT * FROM t {WHERE id = 999} ORDER BY id").unwrap();
        assert_eq!(q, "SELECT * FROM t ORDER BY id");
    }

    #[test]
    fn removal_at_query_start_keeps_the_rest() {
        let q = resolve("{id = 999} SELECT 1").unwrap();
        assert_eq!(q, "SELECT 1");
    }

    #[test]
    fn two_regions_are_rejected() {
        let err = resolve("a {b} c {d}").unwrap_err();
        assert_eq!(err, TplError::NestedConditionalBlock);
    }

    #[test]
    fn nested_opens_are_rejected() {
        assert_eq!(
            resolve("a {b {c} d}").unwrap_err(),
            TplError::NestedConditionalBlock
        );
        assert_eq!(
            resolve("a b} c} d").unwrap_err(),
            TplError::NestedConditionalBlock
        );
    }

    #[test]
    fn lone_delimiter_is_left_alone() {
        assert_eq!(resolve("a { b").unwrap(), "a { b");
        assert_eq!(resolve("a } b { c").unwrap(), "a } b { c");
    }
}
