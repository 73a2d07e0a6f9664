//! Pointcut rules
//!
//! A [`PointcutRule`] is a declarative predicate over a
//! [`TargetDescriptor`](super::TargetDescriptor). Rules are plain data so
//! they can be declared in configuration; evaluation lives in the
//! application layer's pointcut matcher.
//!
//! ```toml
//! [[aspects.caching.pointcuts]]
//! visibility = "public"
//! module = { prefix = "calc" }
//! params = { exact = ["i64"] }
//! ```

use super::descriptor::Visibility;
use super::value::ParamType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern over the owning module path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModulePattern {
    /// Any module
    #[default]
    Any,
    /// Exactly this module path
    Exact(String),
    /// This module path or any module nested below it
    Prefix(String),
}

/// Pattern over a type or method name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NamePattern {
    /// Any name
    #[default]
    Any,
    /// Exactly this name
    Exact(String),
    /// Pattern where `*` matches any run of characters; nothing else is special
    Wildcard(String),
}

/// Pattern over the parameter type list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParamsPattern {
    /// Any parameter list
    #[default]
    Any,
    /// Exactly this parameter list, in order
    Exact(Vec<ParamType>),
}

/// Declarative predicate selecting the calls an advice applies to
///
/// Every part defaults to "any", so `PointcutRule::default()` matches
/// every resolved descriptor.
///
/// # Example
///
/// ```
/// use weave_domain::value_objects::{ParamType, PointcutRule};
///
/// // public * calc..*(i64)
/// let rule = PointcutRule::default()
///     .public()
///     .in_module_tree("calc")
///     .with_params(vec![ParamType::I64]);
/// assert_eq!(rule.to_string(), "execution(public calc..*.*(i64))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PointcutRule {
    /// Required visibility (`None` = any)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Module path pattern
    #[serde(default)]
    pub module: ModulePattern,
    /// Owning type name pattern
    #[serde(default)]
    pub type_name: NamePattern,
    /// Method name pattern
    #[serde(default)]
    pub method: NamePattern,
    /// Parameter list pattern
    #[serde(default)]
    pub params: ParamsPattern,
}

impl PointcutRule {
    /// Require public visibility
    pub fn public(mut self) -> Self {
        self.visibility = Some(Visibility::Public);
        self
    }

    /// Require a specific visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Require exactly this module path
    pub fn in_module<S: Into<String>>(mut self, module: S) -> Self {
        self.module = ModulePattern::Exact(module.into());
        self
    }

    /// Require this module path or any module below it
    pub fn in_module_tree<S: Into<String>>(mut self, module: S) -> Self {
        self.module = ModulePattern::Prefix(module.into());
        self
    }

    /// Require exactly this owning type name
    pub fn on_type<S: Into<String>>(mut self, type_name: S) -> Self {
        self.type_name = NamePattern::Exact(type_name.into());
        self
    }

    /// Require exactly this method name
    pub fn method_named<S: Into<String>>(mut self, method: S) -> Self {
        self.method = NamePattern::Exact(method.into());
        self
    }

    /// Require a method name matching a glob pattern
    pub fn method_like<S: Into<String>>(mut self, pattern: S) -> Self {
        self.method = NamePattern::Wildcard(pattern.into());
        self
    }

    /// Require exactly this parameter list
    pub fn with_params(mut self, params: Vec<ParamType>) -> Self {
        self.params = ParamsPattern::Exact(params);
        self
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(name) | Self::Wildcard(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for PointcutRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("execution(")?;
        if let Some(visibility) = self.visibility {
            write!(f, "{} ", visibility)?;
        }
        match &self.module {
            ModulePattern::Any => {}
            ModulePattern::Exact(module) => write!(f, "{}.", module)?,
            ModulePattern::Prefix(module) => write!(f, "{}..", module)?,
        }
        write!(f, "{}.{}", self.type_name, self.method)?;
        match &self.params {
            ParamsPattern::Any => f.write_str("(..)")?,
            ParamsPattern::Exact(params) => {
                let rendered = params
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "({})", rendered)?;
            }
        }
        f.write_str(")")
    }
}
