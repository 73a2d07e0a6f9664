//! Target descriptors
//!
//! A [`TargetDescriptor`] is the reflective metadata of one callable
//! method: where it lives, what it is called, what it accepts and who
//! may call it. Descriptors are created once when a proxy is built and
//! never change afterwards.

use super::value::{ParamType, Value};
use crate::constants::MODULE_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visibility of a callable method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Callable from anywhere
    #[default]
    Public,
    /// Callable within the owning crate
    Crate,
    /// Callable only within the owning module
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Crate => f.write_str("crate"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// Metadata identifying one callable unit
///
/// # Example
///
/// ```
/// use weave_domain::value_objects::{ParamType, TargetDescriptor};
///
/// let descriptor = TargetDescriptor::new("calc::recursive", "RecCalculator", "factorial")
///     .with_params(vec![ParamType::I64]);
/// assert_eq!(descriptor.signature(), "calc::recursive::RecCalculator::factorial(i64)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetDescriptor {
    module: String,
    type_name: String,
    method: String,
    params: Vec<ParamType>,
    visibility: Visibility,
}

impl TargetDescriptor {
    /// Create a public, parameterless descriptor
    pub fn new<M, T, N>(module: M, type_name: T, method: N) -> Self
    where
        M: Into<String>,
        T: Into<String>,
        N: Into<String>,
    {
        Self {
            module: module.into(),
            type_name: type_name.into(),
            method: method.into(),
            params: Vec::new(),
            visibility: Visibility::Public,
        }
    }

    /// Set the parameter type list
    pub fn with_params(mut self, params: Vec<ParamType>) -> Self {
        self.params = params;
        self
    }

    /// Set the visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Module path owning the type
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Name of the owning type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Method name
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Declared parameter types, in order
    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    /// Method visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Fully qualified type name, `module::Type`
    pub fn qualified_type(&self) -> String {
        if self.module.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}{}{}", self.module, MODULE_SEPARATOR, self.type_name)
        }
    }

    /// Rendered signature, `module::Type::method(p1, p2)`
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}{}{}({})",
            self.qualified_type(),
            MODULE_SEPARATOR,
            self.method,
            params
        )
    }

    /// Check whether every part of the metadata is known
    pub fn is_resolved(&self) -> bool {
        !self.module.is_empty()
            && !self.method.is_empty()
            && self.params.iter().all(ParamType::is_resolved)
    }

    /// Check whether an argument list fits the declared parameters
    pub fn accepts(&self, args: &[Value]) -> bool {
        args.len() == self.params.len()
            && args
                .iter()
                .zip(&self.params)
                .all(|(arg, param)| &arg.param_type() == param)
    }
}

impl fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.visibility, self.signature())
    }
}
