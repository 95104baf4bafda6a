use thiserror::Error;

/// Failures at the edges of the frontend: runtime configuration, the browser
/// platform and the logging subscriber. Navigation itself never fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Platform error: {0}")]
    Platform(String),
    #[error("Logging error: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_prefixes_the_error_kind() {
        assert_eq!(
            AppError::Config("breakpoint_px must be positive".to_string()).to_string(),
            "Config error: breakpoint_px must be positive"
        );
        assert_eq!(
            AppError::Platform("Window not found".to_string()).to_string(),
            "Platform error: Window not found"
        );
    }
}
