//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Weave
#[derive(Error, Debug)]
pub enum Error {
    /// A pointcut rule does not apply to a descriptor
    ///
    /// Raised by explicit pointcut checks. While building a chain this
    /// only means the advice is not attached; it never aborts a call.
    #[error("Pointcut mismatch for {descriptor}: {reason}")]
    PointcutMismatch {
        /// Signature of the descriptor that was checked
        descriptor: String,
        /// Why the rule did not match
        reason: String,
    },

    /// An advice's structural precondition does not hold for a descriptor
    #[error("Contract violation by advice '{advice}' on {descriptor}: {message}")]
    ContractViolation {
        /// Name of the advice whose precondition failed
        advice: String,
        /// Signature of the offending descriptor
        descriptor: String,
        /// Description of the violated precondition
        message: String,
    },

    /// Failure raised by the wrapped target call
    #[error("Target failure: {message}")]
    Target {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The proxied target exposes no method with this name
    #[error("Method not found: {target}::{method}")]
    MethodNotFound {
        /// Qualified name of the target type
        target: String,
        /// Requested method name
        method: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Interception error creation methods
impl Error {
    /// Create a pointcut mismatch error
    pub fn pointcut_mismatch<D: Into<String>, R: Into<String>>(descriptor: D, reason: R) -> Self {
        Self::PointcutMismatch {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract_violation<A, D, M>(advice: A, descriptor: D, message: M) -> Self
    where
        A: Into<String>,
        D: Into<String>,
        M: Into<String>,
    {
        Self::ContractViolation {
            advice: advice.into(),
            descriptor: descriptor.into(),
            message: message.into(),
        }
    }

    /// Create a target failure
    pub fn target<S: Into<String>>(message: S) -> Self {
        Self::Target {
            message: message.into(),
            source: None,
        }
    }

    /// Create a target failure with source
    pub fn target_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Target {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a method not found error
    pub fn method_not_found<T: Into<String>, M: Into<String>>(target: T, method: M) -> Self {
        Self::MethodNotFound {
            target: target.into(),
            method: method.into(),
        }
    }

    /// Check whether this error was raised by the wrapped target
    pub fn is_target_failure(&self) -> bool {
        matches!(self, Self::Target { .. })
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
