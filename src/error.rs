use thiserror::Error;

/// Request-validation errors, detected before any remote call is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid plan '{plan}'")]
    InvalidPlan { plan: String },
}

/// Failures of a single remote call, tagged with the operation that failed.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("{operation}: request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: unexpected status {status}")]
    Status { operation: &'static str, status: u16 },

    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: timed out")]
    Timeout { operation: &'static str },

    #[error("{operation}: rejected by remote: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },
}

impl RemoteError {
    /// Map a reqwest failure to a transport or timeout error for `operation`.
    pub fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { operation }
        } else {
            Self::Transport { operation, source }
        }
    }

    /// The name of the remote operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Transport { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Timeout { operation }
            | Self::Rejected { operation, .. } => operation,
        }
    }
}

/// A legitimate absence: the resource is missing, not the transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{resource} '{name}' not found")]
pub struct NotFoundError {
    pub resource: &'static str,
    pub name: String,
}

impl NotFoundError {
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            resource: "user",
            name: name.into(),
        }
    }

    pub fn project(name: impl Into<String>) -> Self {
        Self {
            resource: "project",
            name: name.into(),
        }
    }
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when this error is a legitimate not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_reports_operation() {
        let err = RemoteError::Status {
            operation: "create_project",
            status: 500,
        };
        assert_eq!(err.operation(), "create_project");
        assert_eq!(err.to_string(), "create_project: unexpected status 500");
    }

    #[test]
    fn validation_error_names_missing_field() {
        let err = ValidationError::MissingField { field: "plan" };
        assert_eq!(err.to_string(), "plan is required");
    }

    #[test]
    fn not_found_is_distinguishable() {
        let err: Error = NotFoundError::project("c-1:p-xyz").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "project 'c-1:p-xyz' not found");
    }
}
