use std::fmt;

use serde::Serialize;

use crate::BeanError;

/// Status codes carried by [`HttpResult`].
///
/// Codes 100-599 are shared with HTTP. Module specific codes are meant to live in
/// their own ranges (1000-1999 users, 2000-2999 orders, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Redirect,
    NotFound,
    ServerError,
    DefaultError,
}

impl ResultCode {
    const ALL: [ResultCode; 5] = [
        ResultCode::Success,
        ResultCode::Redirect,
        ResultCode::NotFound,
        ResultCode::ServerError,
        ResultCode::DefaultError,
    ];

    pub fn code(&self) -> i32 {
        match self {
            ResultCode::Success => 200,
            ResultCode::Redirect => 301,
            ResultCode::NotFound => 404,
            ResultCode::ServerError | ResultCode::DefaultError => 500,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ResultCode::Success => "successful",
            ResultCode::Redirect => "redirect",
            ResultCode::NotFound => "not found",
            ResultCode::ServerError => "server error",
            ResultCode::DefaultError => "error",
        }
    }

    pub fn is_success(&self) -> bool {
        self.code() == 200
    }

    /// Looks a code up, falling back to [`ResultCode::Success`] for unknown codes.
    pub fn from_code(code: i32) -> ResultCode {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.code() == code)
            .unwrap_or(ResultCode::Success)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}

/// Uniform response envelope.
///
/// ```
/// use bean_copier_rs::util::result::HttpResult;
///
/// let json = HttpResult::success_with(vec![1, 2]).to_json().unwrap();
/// assert_eq!(json, r#"{"success":true,"code":200,"data":[1,2]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResult<T> {
    pub success: bool,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> HttpResult<T> {
    pub fn success() -> Self {
        Self {
            success: true,
            code: ResultCode::Success.code(),
            data: None,
            message: None,
        }
    }

    pub fn success_with(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::success()
        }
    }

    /// Failure with the code of [`ResultCode::DefaultError`].
    pub fn failure(message: &str) -> Self {
        Self::failure_with_code(ResultCode::DefaultError.code(), message)
    }

    pub fn failure_with_code(code: i32, message: &str) -> Self {
        Self {
            success: false,
            code,
            data: None,
            message: Some(message.to_string()),
        }
    }

    pub fn from_result_code(result_code: ResultCode) -> Self {
        Self {
            success: result_code.is_success(),
            code: result_code.code(),
            data: None,
            message: Some(result_code.message().to_string()),
        }
    }
}

impl<T: Serialize> HttpResult<T> {
    pub fn to_json(&self) -> Result<String, BeanError> {
        serde_json::to_string(self).map_err(|error| BeanError::Conversion(error.to_string()))
    }
}
