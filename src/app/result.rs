use crate::utils::error::CatalogError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something unusable.
    Validation,
    /// Something failed inside the service (repository, etc).
    Internal,
}

/// Envelope returned by every use case: `{success: true, data}` or
/// `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCaseResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub error_kind: Option<ErrorKind>,
}

impl<T> UseCaseResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_kind: None,
        }
    }

    pub fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            error_kind: Some(kind),
        }
    }

    pub fn from_error(err: &CatalogError) -> Self {
        let kind = if err.is_validation() {
            ErrorKind::Validation
        } else {
            ErrorKind::Internal
        };
        Self::failed(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(UseCaseResult::ok(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let err = CatalogError::RepositoryError {
            message: "disk on fire".to_string(),
        };
        let result: UseCaseResult<Vec<u8>> = UseCaseResult::from_error(&err);

        assert_eq!(result.error_kind, Some(ErrorKind::Internal));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "Repository error: disk on fire"})
        );
    }

    #[test]
    fn test_validation_errors_keep_their_kind() {
        let err = CatalogError::ValidationError {
            field: "name".to_string(),
            reason: "name cannot be empty".to_string(),
        };
        let result: UseCaseResult<()> = UseCaseResult::from_error(&err);
        assert_eq!(result.error_kind, Some(ErrorKind::Validation));
        assert!(!result.success);
    }
}
