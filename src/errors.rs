//! Build-time errors.
//!
//! Every error here is permanent: the spec (or its constructor) has to change before a rebuild can
//! succeed, so nothing is retried.

use miette::Diagnostic;
use thiserror::Error;

use crate::spec::StepError;

/// One or more methods were classified into more than one role.
///
/// Carries the qualified name (`Type.method`) of every offending method, each listed once.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("The following methods are ambiguously named:\n{}", .methods.join("\n"))]
#[diagnostic(
    code(contexts::method_naming),
    help("rename or tag each method so it plays exactly one of setup, action, assertion or teardown")
)]
pub struct MethodNamingError {
    pub methods: Vec<String>,
}

impl MethodNamingError {
    pub fn new(methods: Vec<String>) -> Self {
        Self { methods }
    }

    /// Whether `qualname` is among the offending methods.
    pub fn mentions(&self, qualname: &str) -> bool {
        self.methods.iter().any(|m| m == qualname)
    }
}

/// Errors raised while building a suite.
#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    MethodNaming(#[from] MethodNamingError),

    /// A spec class could not be constructed. The constructor's error is kept as the source, untouched.
    #[error("failed to construct spec `{class}`: {source}")]
    #[diagnostic(code(contexts::construction))]
    Construction {
        class: String,
        #[source]
        source: StepError,
    },
}

impl BuildError {
    pub fn construction(class: impl Into<String>, source: StepError) -> Self {
        Self::Construction {
            class: class.into(),
            source,
        }
    }
}

/// Result type for builder operations.
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_lists_every_method() {
        let err = MethodNamingError::new(vec!["A.establish_because".to_string(), "A.when_it".to_string()]);
        insta::assert_snapshot!(err.to_string(), @r"
        The following methods are ambiguously named:
        A.establish_because
        A.when_it
        ");
    }

    #[test]
    fn test_mentions() {
        let err = MethodNamingError::new(vec!["A.x".to_string()]);
        assert!(err.mentions("A.x"));
        assert!(!err.mentions("A.y"));
    }

    #[test]
    fn test_naming_error_is_transparent_in_build_error() {
        let inner = MethodNamingError::new(vec!["A.x".to_string()]);
        let err = BuildError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("contexts::method_naming")
        );
    }

    #[test]
    fn test_construction_error_keeps_source() {
        let err = BuildError::construction("WhenConnecting", "connection refused".into());
        assert_eq!(err.to_string(), "failed to construct spec `WhenConnecting`: connection refused");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("connection refused"));
    }
}
