use serde::{Deserialize, Serialize};

/// Success/failure envelope returned to callers
///
/// Exactly one of `value` and `error` is present: a failed operation never
/// carries a partial cube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResult<T> {
    pub is_successful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ServiceResult<T> {
    pub fn ok(value: T) -> Self {
        Self {
            is_successful: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn bad(error: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            value: None,
            error: Some(error.into()),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ServiceResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::bad(err.to_string()),
        }
    }
}
