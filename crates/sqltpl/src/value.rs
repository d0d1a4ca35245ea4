//! Argument values for query templates.
//!
//! This module provides [`Value`], the owned argument type bound to template
//! placeholders, and [`skip`], the sentinel marking a conditional block for
//! removal.
//!
//! `Value` converts from the common Rust scalars and containers, and from
//! [`serde_json::Value`] so call sites can use `json!` literals:
//!
//! ```ignore
//! use sqltpl::{Value, build_query};
//! use serde_json::json;
//!
//! let q = build_query("SELECT * FROM users WHERE id = ?d", &[Value::from(42)])?;
//! let v = Value::from(json!(["id", "name"]));
//! # Ok::<(), sqltpl::TplError>(())
//! ```

/// The marker digits the skip sentinel renders to.
pub(crate) const SKIP_MARKER: &str = "999";

/// An argument value bound to a template placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string
    Str(String),
    /// Signed integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// SQL NULL
    Null,
    /// Ordered sequence of values
    Seq(Vec<Value>),
    /// Ordered key→value mapping; iteration order is insertion order
    Map(Vec<(String, Value)>),
    /// The skip sentinel, distinct from every legitimate argument value
    Skip,
}

impl Value {
    /// Build an ordered mapping value for the `?a` specifier.
    ///
    /// ```ignore
    /// use sqltpl::Value;
    ///
    /// let fields = Value::map([("name", Value::from("Jack")), ("email", Value::Null)]);
    /// ```
    pub fn map<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The kind tag of this value, used in error messages.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
            Value::Skip => ValueKind::Skip,
        }
    }
}

/// Kind tag for a [`Value`], used when reporting unsupported arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Float,
    Bool,
    Null,
    Seq,
    Map,
    Skip,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
            ValueKind::Null => "null",
            ValueKind::Seq => "sequence",
            ValueKind::Map => "mapping",
            ValueKind::Skip => "skip sentinel",
        };
        f.write_str(name)
    }
}

/// The skip sentinel.
///
/// Bind the returned value to any placeholder inside a `{...}` conditional
/// block to drop the whole block from the built query:
///
/// ```ignore
/// use sqltpl::{build_query, skip};
///
/// let q = build_query("SELECT * FROM users {WHERE block = ?d}", &[skip()])?;
/// assert_eq!(q, "SELECT * FROM users");
/// # Ok::<(), sqltpl::TplError>(())
/// ```
///
/// The sentinel renders as the literal digits `999` and the block resolver
/// detects that marker textually, so a legitimate value that renders `999`
/// inside the block will also trigger removal.
pub fn skip() -> Value {
    Value::Skip
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX and every fractional number
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
