//! Argument and result values
//!
//! Values travel through the advice chain without the chain knowing the
//! target's concrete Rust signature. Each value reports the
//! [`ParamType`] it satisfies so descriptors can be checked against
//! actual arguments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a method parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// No value
    Unit,
    /// Boolean flag
    Bool,
    /// Signed 64-bit integer
    I64,
    /// Unsigned 64-bit integer
    U64,
    /// 64-bit float
    F64,
    /// UTF-8 string
    Str,
    /// Ordered list of values
    List,
    /// Type whose metadata could not be resolved
    ///
    /// Descriptors carrying an unresolved parameter never match a pointcut.
    Unresolved(String),
}

impl ParamType {
    /// Check whether the type metadata is available
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool => f.write_str("bool"),
            Self::I64 => f.write_str("i64"),
            Self::U64 => f.write_str("u64"),
            Self::F64 => f.write_str("f64"),
            Self::Str => f.write_str("str"),
            Self::List => f.write_str("list"),
            Self::Unresolved(name) => write!(f, "?{}", name),
        }
    }
}

/// Dynamically typed argument or result value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// No value
    Unit,
    /// Boolean flag
    Bool(bool),
    /// Signed 64-bit integer
    I64(i64),
    /// Unsigned 64-bit integer
    U64(u64),
    /// 64-bit float
    F64(f64),
    /// UTF-8 string
    Str(String),
    /// Ordered list of values
    List(Vec<Value>),
}

impl Value {
    /// The parameter type this value satisfies
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Unit => ParamType::Unit,
            Self::Bool(_) => ParamType::Bool,
            Self::I64(_) => ParamType::I64,
            Self::U64(_) => ParamType::U64,
            Self::F64(_) => ParamType::F64,
            Self::Str(_) => ParamType::Str,
            Self::List(_) => ParamType::List,
        }
    }

    /// Get the signed integer, if this is one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the unsigned integer, if this is one
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the boolean, if this is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the string slice, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Convert into a JSON value for structured logging
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Unit => serde_json::Value::Null,
            Self::Bool(v) => serde_json::json!(v),
            Self::I64(v) => serde_json::json!(v),
            Self::U64(v) => serde_json::json!(v),
            Self::F64(v) => serde_json::json!(v),
            Self::Str(v) => serde_json::json!(v),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
        }
    }

    /// Render an argument list as `a, b, c`
    pub fn render_list(values: &[Value]) -> String {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Str(v) => write!(f, "{:?}", v),
            Self::List(items) => write!(f, "[{}]", Self::render_list(items)),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}
