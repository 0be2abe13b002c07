use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to load profile from {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Profile is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing mount point: #{id}")]
    MissingMount { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network failure, bad status or malformed profile.
    Load,
    /// Host page is missing an element the binder needs.
    Page,
    Io,
    Config,
}

impl ProfileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::Request(_) | ProfileError::Status { .. } | ProfileError::Parse(_) => {
                ErrorCategory::Load
            }
            ProfileError::MissingMount { .. } => ErrorCategory::Page,
            ProfileError::IoError(_) => ErrorCategory::Io,
            ProfileError::ConfigValidationError { .. }
            | ProfileError::MissingConfigError { .. }
            | ProfileError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn is_load_error(&self) -> bool {
        self.category() == ErrorCategory::Load
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::Request(e) if e.is_timeout() => {
                "The profile request timed out".to_string()
            }
            ProfileError::Request(_) => "Could not reach the server hosting profile.json".to_string(),
            ProfileError::Status { status, .. } => {
                format!("The server answered HTTP {} for profile.json", status)
            }
            ProfileError::Parse(_) => "profile.json is not a valid profile document".to_string(),
            ProfileError::MissingMount { id } => {
                format!("The page shell has no element with id '{}'", id)
            }
            ProfileError::IoError(_) => "Could not write the rendered page".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Load => {
                "Check data/profile.json and serve the site via a local server (not file://)"
            }
            ErrorCategory::Page => "Restore the missing element id in the page shell",
            ErrorCategory::Io => "Check that the output directory is writable",
            ErrorCategory::Config => "Review the command line flags or the TOML configuration",
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Load => 2,
            ErrorCategory::Page => 3,
            ErrorCategory::Io => 4,
            ErrorCategory::Config => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_url_and_status() {
        let err = ProfileError::Status {
            url: "http://localhost/data/profile.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Failed to load profile from http://localhost/data/profile.json: HTTP 404"
        );
        assert!(err.is_load_error());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_error_is_load_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = ProfileError::from(parse);
        assert_eq!(err.category(), ErrorCategory::Load);
        assert!(err.to_string().starts_with("Profile is not valid JSON: "));
    }

    #[test]
    fn test_missing_mount_category() {
        let err = ProfileError::MissingMount {
            id: "skills".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Page);
        assert!(!err.is_load_error());
        assert_eq!(err.to_string(), "Missing mount point: #skills");
    }
}
