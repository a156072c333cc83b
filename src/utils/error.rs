use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid asset path '{path}': {reason}")]
    InvalidAssetPath { path: String, reason: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Request,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AstroError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AstroError::IoError(_) => ErrorCategory::Io,
            AstroError::ConfigError { .. }
            | AstroError::ConfigValidationError { .. }
            | AstroError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AstroError::InvalidAssetPath { .. } => ErrorCategory::Request,
            AstroError::ServerError { .. } => ErrorCategory::Server,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Server => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AstroError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            AstroError::ConfigError { message } => format!("配置錯誤: {}", message),
            AstroError::ConfigValidationError { field, message } => {
                format!("配置欄位 '{}' 無效: {}", field, message)
            }
            AstroError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("配置欄位 '{}' 的值 '{}' 無效: {}", field, value, reason),
            AstroError::InvalidAssetPath { path, .. } => format!("不允許的檔案路徑: {}", path),
            AstroError::ServerError { message } => format!("伺服器錯誤: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AstroError::IoError(_) => "Check that the file exists and is readable",
            AstroError::ConfigError { .. } | AstroError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax and values"
            }
            AstroError::InvalidConfigValueError { .. } => {
                "Fix the reported value via CLI flag, config file or environment"
            }
            AstroError::InvalidAssetPath { .. } => "Request a path inside the static folder",
            AstroError::ServerError { .. } => {
                "Check that the address is free and the process may bind to it"
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AstroError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                StatusCode::NOT_FOUND
            }
            AstroError::InvalidAssetPath { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AstroError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AstroError>;
