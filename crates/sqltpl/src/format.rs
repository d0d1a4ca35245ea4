//! Per-specifier value formatting.
//!
//! This module renders one [`Value`] into its literal textual SQL form,
//! selected by the placeholder's [`Specifier`]:
//!
//! - `?d` — integer coercion, rendered as bare decimal digits
//! - `?f` — float coercion, rendered in plain decimal notation
//! - `?a` — a mapping as `` `key` = 'value' `` pairs, or a sequence as a
//!   comma-separated list of raw element forms
//! - `?#` — identifier quoting with backticks
//! - bare `?` — the value quote-meta escaped and wrapped in single quotes
//!
//! The `?a` sequence branch and the `?#` branch render elements without
//! escaping; callers must only pass trusted scalar elements there.

use std::fmt::Write;

use crate::error::{TplError, TplResult};
use crate::value::{SKIP_MARKER, Value};

/// A placeholder's formatting specifier: the character after `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// `?d` — integer
    Int,
    /// `?f` — float
    Float,
    /// `?a` — array/set
    List,
    /// `?#` — identifier
    Ident,
}

impl Specifier {
    /// Parse a specifier character. Any other character is not a specifier
    /// and the placeholder takes the generic path.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Specifier::Int),
            'f' => Some(Specifier::Float),
            'a' => Some(Specifier::List),
            '#' => Some(Specifier::Ident),
            _ => None,
        }
    }

    /// The character form, as written after `?` in a template.
    pub fn as_char(&self) -> char {
        match self {
            Specifier::Int => 'd',
            Specifier::Float => 'f',
            Specifier::List => 'a',
            Specifier::Ident => '#',
        }
    }
}

/// Render one argument into its literal SQL form.
///
/// Pure function of its inputs; `None` selects the generic (quoted) path.
pub fn format_value(value: &Value, specifier: Option<Specifier>) -> TplResult<String> {
    // The sentinel renders as its marker under every specifier so the block
    // resolver can detect it after substitution.
    if matches!(value, Value::Skip) {
        return Ok(SKIP_MARKER.to_string());
    }

    match specifier {
        Some(Specifier::Int) => Ok(coerce_int(value)?.to_string()),
        Some(Specifier::Float) => Ok(coerce_float(value)?.to_string()),
        Some(Specifier::List) => format_list(value),
        Some(Specifier::Ident) => format_ident(value),
        None => format_generic(value),
    }
}

/// Characters escaped in quoted literals: the quote-meta set plus `'`.
fn needs_escape(c: char) -> bool {
    matches!(
        c,
        '.' | '\\' | '+' | '*' | '?' | '[' | '^' | ']' | '$' | '(' | ')' | '\''
    )
}

fn push_quote_meta(out: &mut String, s: &str) {
    for c in s.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
}

/// The unquoted string form a scalar takes in list, identifier, and quoted
/// contexts. Booleans and null follow the original loose string casts
/// (`true` → `1`, `false` and null → empty).
fn push_raw(out: &mut String, value: &Value) -> TplResult<()> {
    match value {
        Value::Str(s) => out.push_str(s),
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Float(f) => {
            let _ = write!(out, "{f}");
        }
        Value::Bool(true) => out.push('1'),
        Value::Bool(false) | Value::Null => {}
        Value::Skip => out.push_str(SKIP_MARKER),
        Value::Seq(_) | Value::Map(_) => {
            return Err(TplError::unsupported(value.kind()));
        }
    }
    Ok(())
}

/// Integer coercion: leading `[+-]?digits` prefix of strings, truncation of
/// floats, 1/0 for booleans, 0 for null. Saturates on overflow.
fn coerce_int(value: &Value) -> TplResult<i64> {
    let n = match value {
        Value::Int(i) => *i,
        Value::Float(f) => f.trunc() as i64,
        Value::Bool(b) => *b as i64,
        Value::Null => 0,
        Value::Str(s) => int_prefix(s),
        Value::Skip => 999,
        Value::Seq(_) | Value::Map(_) => {
            return Err(TplError::unsupported(value.kind()));
        }
    };
    Ok(n)
}

fn int_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut n: i64 = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        n = n.saturating_mul(10);
        n = if negative {
            n.saturating_sub(d as i64)
        } else {
            n.saturating_add(d as i64)
        };
    }
    n
}

/// Float coercion: leading `[+-]?digits[.digits][e±digits]` prefix of
/// strings, 1/0 for booleans, 0 for null.
fn coerce_float(value: &Value) -> TplResult<f64> {
    let f = match value {
        Value::Float(f) => *f,
        Value::Int(i) => *i as f64,
        Value::Bool(b) => *b as i64 as f64,
        Value::Null => 0.0,
        Value::Str(s) => float_prefix(s),
        Value::Skip => 999.0,
        Value::Seq(_) | Value::Map(_) => {
            return Err(TplError::unsupported(value.kind()));
        }
    };
    Ok(f)
}

fn float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - frac_start;
        // A bare '.' with no digits on either side is not a number.
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().unwrap_or(0.0)
}

fn format_list(value: &Value) -> TplResult<String> {
    match value {
        Value::Map(pairs) => {
            let mut out = String::new();
            for (i, (key, val)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('`');
                out.push_str(key);
                out.push_str("` = ");
                match val {
                    Value::Null => out.push_str("NULL"),
                    _ => {
                        let mut raw = String::new();
                        push_raw(&mut raw, val)?;
                        out.push('\'');
                        push_quote_meta(&mut out, &raw);
                        out.push('\'');
                    }
                }
            }
            Ok(out)
        }
        Value::Seq(items) => {
            // Caller-trust branch: elements render raw, no quoting.
            let mut out = String::new();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                push_raw(&mut out, item)?;
            }
            Ok(out)
        }
        _ => Err(TplError::unsupported(value.kind())),
    }
}

fn format_ident(value: &Value) -> TplResult<String> {
    match value {
        Value::Str(s) => Ok(format!("`{s}`")),
        Value::Seq(items) => {
            let mut out = String::new();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('`');
                push_raw(&mut out, item)?;
                out.push('`');
            }
            Ok(out)
        }
        _ => Err(TplError::unsupported(value.kind())),
    }
}

fn format_generic(value: &Value) -> TplResult<String> {
    // Allow-list is checked on the original kind, before any coercion.
    match value {
        Value::Seq(_) | Value::Map(_) => Err(TplError::unsupported(value.kind())),
        _ => {
            let mut raw = String::new();
            push_raw(&mut raw, value)?;
            let mut out = String::with_capacity(raw.len() + 2);
            out.push('\'');
            push_quote_meta(&mut out, &raw);
            out.push('\'');
            Ok(out)
        }
    }
}
