use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === TRANSPORT ERRORS ===
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    // === APPLICATION ERRORS ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl AppError {
    /// HTTP status reported by the remote API, if the failure came from it.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
