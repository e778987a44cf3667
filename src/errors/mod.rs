use thiserror::Error;

/// Errors that cross the planner's boundary. Model failures never appear here;
/// they degrade to the heuristic path instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanError {
    #[error("Malformed merge request reference '{input}': {reason}")]
    MalformedReference {
        input: String,
        reason: String,
    },

    #[error("Merge request !{change_number} not found in project '{project_path}'")]
    ChangeSetNotFound {
        project_path: String,
        change_number: u64,
    },

    #[error("Access denied to project '{project_path}' (HTTP {status_code})")]
    AccessDenied {
        project_path: String,
        status_code: u16,
    },

    #[error("Source control request '{operation}' failed: {reason}")]
    SourceControlUnavailable {
        operation: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {reason}")]
    Configuration {
        field: String,
        reason: String,
    },
}

impl PlanError {
    pub fn malformed(input: &str, reason: &str) -> Self {
        Self::MalformedReference {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(field: &str, reason: &str) -> Self {
        Self::Configuration {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn source_control_error(operation: &str, reason: &str) -> Self {
        Self::SourceControlUnavailable {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Input errors are fatal to the request and are never retried.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedReference { .. } | Self::ChangeSetNotFound { .. } | Self::AccessDenied { .. }
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedReference { .. } => format!(
                "{}\n💡 Expected a URL like https://gitlab.example.com/group/project/-/merge_requests/42",
                self
            ),
            Self::ChangeSetNotFound { .. } => {
                format!("{}\n💡 Check the merge request number and project path", self)
            }
            Self::AccessDenied { .. } => {
                format!("{}\n💡 Export a GITLAB_TOKEN with read_api scope for this project", self)
            }
            Self::SourceControlUnavailable { .. } => {
                format!("{}\n💡 Check your network connection and the GitLab instance URL", self)
            }
            Self::Configuration { .. } => {
                format!("{}\n💡 Run 'mr-test-planner validate' to inspect your configuration", self)
            }
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;

impl From<toml::de::Error> for PlanError {
    fn from(error: toml::de::Error) -> Self {
        PlanError::Configuration {
            field: "config.toml".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<std::io::Error> for PlanError {
    fn from(error: std::io::Error) -> Self {
        PlanError::Configuration {
            field: "config.toml".to_string(),
            reason: error.to_string(),
        }
    }
}

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &PlanError) {
        if error.is_input_error() {
            log::debug!("{:?}", error);
        } else {
            log::error!("{:?}", error);
        }
        eprintln!("❌ {}", error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        assert!(PlanError::malformed("x", "no scheme").is_input_error());
        assert!(PlanError::AccessDenied { project_path: "g/p".into(), status_code: 403 }.is_input_error());
        assert!(!PlanError::source_control_error("fetch", "timeout").is_input_error());
        assert!(!PlanError::config_error("ai.host", "bad url").is_input_error());
    }

    #[test]
    fn user_message_carries_hint() {
        let message = PlanError::ChangeSetNotFound { project_path: "g/p".into(), change_number: 7 }.user_message();
        assert!(message.starts_with("Merge request !7 not found in project 'g/p'"));
        assert!(message.contains("💡"));
    }
}
