use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Server configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to send HTTP request: {0}")]
    Transport(String),

    #[error("Invalid password")]
    AuthFailed,
}

impl ApiError {
    /// HTTP status code the client should see for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Config(_) | ApiError::Transport(_) => 500,
            ApiError::Validation(_) => 400,
            ApiError::MethodNotAllowed => 405,
            ApiError::Upstream { status, .. } => *status,
            ApiError::AuthFailed => 401,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Validation(format!("Invalid JSON body: {error}"))
    }
}
