//! Pointcut matching
//!
//! Structural matching of [`PointcutRule`]s against
//! [`TargetDescriptor`]s. Every part of a rule must match; there is no
//! partial or fuzzy matching.
//!
//! Matching fails closed: a descriptor whose metadata is incomplete never
//! matches, and an invalid wildcard pattern never matches either. Neither
//! case is an error that could abort a call.
//!
//! In wildcard name patterns only `*` is special. Glob metacharacters such
//! as `?`, `[...]` and `{a,b}` are escaped and match themselves.

use globset::{GlobBuilder, GlobMatcher};
use weave_domain::constants::MODULE_SEPARATOR;
use weave_domain::error::{Error, Result};
use weave_domain::value_objects::{
    ModulePattern, NamePattern, ParamsPattern, PointcutRule, TargetDescriptor,
};

/// Decides whether pointcut rules apply to call descriptors
pub struct PointcutMatcher;

impl PointcutMatcher {
    /// Check whether `rule` matches `descriptor`
    pub fn matches(rule: &PointcutRule, descriptor: &TargetDescriptor) -> bool {
        Self::check(rule, descriptor).is_ok()
    }

    /// Check whether any of `rules` matches `descriptor`
    pub fn matches_any(rules: &[PointcutRule], descriptor: &TargetDescriptor) -> bool {
        rules.iter().any(|rule| Self::matches(rule, descriptor))
    }

    /// Explain why `rule` does or does not match `descriptor`
    ///
    /// Returns `Error::PointcutMismatch` naming the first part of the rule
    /// that failed.
    pub fn check(rule: &PointcutRule, descriptor: &TargetDescriptor) -> Result<()> {
        let mismatch = |reason: String| Err(Error::pointcut_mismatch(descriptor.signature(), reason));

        if !descriptor.is_resolved() {
            return mismatch("descriptor metadata is unresolved".to_string());
        }

        if let Some(visibility) = rule.visibility {
            if descriptor.visibility() != visibility {
                return mismatch(format!(
                    "visibility {} is not {}",
                    descriptor.visibility(),
                    visibility
                ));
            }
        }

        if !Self::module_matches(&rule.module, descriptor.module()) {
            return mismatch(format!(
                "module '{}' does not match {:?}",
                descriptor.module(),
                rule.module
            ));
        }

        if !Self::name_matches(&rule.type_name, descriptor.type_name()) {
            return mismatch(format!(
                "type '{}' does not match '{}'",
                descriptor.type_name(),
                rule.type_name
            ));
        }

        if !Self::name_matches(&rule.method, descriptor.method()) {
            return mismatch(format!(
                "method '{}' does not match '{}'",
                descriptor.method(),
                rule.method
            ));
        }

        if let ParamsPattern::Exact(params) = &rule.params {
            if params.as_slice() != descriptor.params() {
                return mismatch(format!(
                    "parameters ({}) do not match the declared list",
                    descriptor
                        .params()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }

        Ok(())
    }

    /// Validate the patterns of a rule before it is registered
    ///
    /// Rejects empty module and name patterns, including empty wildcards.
    pub fn validate_rule(rule: &PointcutRule) -> Result<()> {
        match &rule.module {
            ModulePattern::Exact(module) | ModulePattern::Prefix(module) if module.is_empty() => {
                return Err(Error::config(format!(
                    "Pointcut {} has an empty module pattern",
                    rule
                )));
            }
            _ => {}
        }

        for pattern in [&rule.type_name, &rule.method] {
            match pattern {
                NamePattern::Any => {}
                NamePattern::Exact(name) | NamePattern::Wildcard(name) if name.is_empty() => {
                    return Err(Error::config(format!(
                        "Pointcut {} has an empty name pattern",
                        rule
                    )));
                }
                NamePattern::Exact(_) => {}
                NamePattern::Wildcard(glob) => {
                    Self::compile_wildcard(glob).map_err(|e| Error::Configuration {
                        message: format!("Invalid wildcard '{}' in pointcut {}", glob, rule),
                        source: Some(Box::new(e)),
                    })?;
                }
            }
        }

        Ok(())
    }

    fn module_matches(pattern: &ModulePattern, module: &str) -> bool {
        match pattern {
            ModulePattern::Any => true,
            ModulePattern::Exact(expected) => module == expected,
            ModulePattern::Prefix(prefix) => {
                module == prefix
                    || module
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with(MODULE_SEPARATOR))
            }
        }
    }

    fn name_matches(pattern: &NamePattern, name: &str) -> bool {
        match pattern {
            NamePattern::Any => true,
            NamePattern::Exact(expected) => name == expected,
            NamePattern::Wildcard(glob) => Self::compile_wildcard(glob)
                .map(|matcher| matcher.is_match(name))
                .unwrap_or(false),
        }
    }

    fn compile_wildcard(pattern: &str) -> std::result::Result<GlobMatcher, globset::Error> {
        let mut escaped = String::with_capacity(pattern.len() * 2);
        for c in pattern.chars() {
            if matches!(c, '?' | '[' | ']' | '{' | '}' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        GlobBuilder::new(&escaped)
            .backslash_escape(true)
            .literal_separator(false)
            .build()
            .map(|glob| glob.compile_matcher())
    }
}
