use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum NorthwindError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Decode error: column {column} - {message}")]
    Decode { column: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl NorthwindError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }
}

pub type NorthwindResult<T> = Result<T, NorthwindError>;

// Conversion from common error types
impl From<sqlx::Error> for NorthwindError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::ColumnDecode { index, source } => Self::decode(index, source.to_string()),
            other => Self::database(other.to_string()),
        }
    }
}

impl From<config::ConfigError> for NorthwindError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

impl From<validator::ValidationErrors> for NorthwindError {
    fn from(error: validator::ValidationErrors) -> Self {
        Self::configuration(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_row_not_found_is_database_error() {
        let error: NorthwindError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_column_decode_keeps_column() {
        let error: NorthwindError = sqlx::Error::ColumnDecode {
            index: "\"ordercount\"".to_string(),
            source: "mismatched types".into(),
        }
        .into();

        match error {
            NorthwindError::Decode { column, message } => {
                assert_eq!(column, "\"ordercount\"");
                assert_eq!(message, "mismatched types");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_config_error_maps_to_configuration() {
        let error: NorthwindError = config::ConfigError::Message("missing url".into()).into();
        assert_eq!(error.error_code(), "CONFIGURATION_ERROR");
        assert!(error.to_string().contains("missing url"));
    }
}
