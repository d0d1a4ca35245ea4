//! Placeholder scanning and substitution.
//!
//! The scanner walks the template's space-delimited segments (placeholders
//! never span a whitespace boundary), binds each segment containing `?` to
//! the next unconsumed argument, and splices in the formatted value. Binding
//! is strictly by order of appearance: one forward-only cursor over both the
//! placeholders and the argument list.

use crate::error::{TplError, TplResult};
use crate::format::{Specifier, format_value};
use crate::value::Value;

/// Replace every placeholder in `template` with its formatted argument.
///
/// Returns [`TplError::MissingArgument`] when the argument list runs out
/// before the placeholders do. Surplus arguments are ignored.
pub fn substitute(template: &str, args: &[Value]) -> TplResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    for (i, segment) in template.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }

        let Some(pos) = segment.find('?') else {
            out.push_str(segment);
            continue;
        };

        let Some(arg) = args.get(cursor) else {
            return Err(TplError::MissingArgument {
                placeholder: cursor + 1,
                provided: args.len(),
            });
        };
        cursor += 1;

        let specifier = segment[pos + 1..]
            .chars()
            .next()
            .and_then(Specifier::from_char);
        let rendered = format_value(arg, specifier)?;

        // Replace the first `?`(+specifier) occurrence only; specifier
        // characters are all single-byte.
        let consumed = if specifier.is_some() { 2 } else { 1 };
        out.push_str(&segment[..pos]);
        out.push_str(&rendered);
        out.push_str(&segment[pos + consumed..]);
    }

    Ok(out)
}
