//! The `{code, message, data}` result envelope returned by every listing
//! operation.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Numeric outcome of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    NotFound,
    Invalid,
}

impl ResultCode {
    pub fn as_i32(&self) -> i32 {
        match self {
            ResultCode::Success => 0,
            ResultCode::NotFound => -1,
            ResultCode::Invalid => -2,
        }
    }

    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(ResultCode::Success),
            -1 => Some(ResultCode::NotFound),
            -2 => Some(ResultCode::Invalid),
            _ => None,
        }
    }
}

/// Language of envelope messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl Locale {
    /// Message shown to the user for a result code
    pub fn message(&self, code: ResultCode) -> &'static str {
        match (self, code) {
            (Locale::Vi, ResultCode::Success) => "Thành công",
            (Locale::Vi, ResultCode::NotFound) => "Không tồn tại",
            (Locale::Vi, ResultCode::Invalid) => "Thông tin không hợp lệ",
            (Locale::En, ResultCode::Success) => "Success",
            (Locale::En, ResultCode::NotFound) => "Not found",
            (Locale::En, ResultCode::Invalid) => "Invalid information",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Locale::Vi),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// Standard result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, locale: Locale) -> Self {
        Self {
            code: ResultCode::Success.as_i32(),
            message: locale.message(ResultCode::Success).to_string(),
            data: Some(data),
        }
    }

    pub fn failure(error: &AppError, locale: Locale) -> Self {
        let code = error.result_code();
        tracing::debug!(
            error_code = error.code(),
            detail = %error.user_message(),
            "Operation failed"
        );
        Self {
            code: code.as_i32(),
            message: locale.message(code).to_string(),
            data: None,
        }
    }

    pub fn from_result(result: AppResult<T>, locale: Locale) -> Self {
        match result {
            Ok(data) => Self::success(data, locale),
            Err(e) => Self::failure(&e, locale),
        }
    }

    pub fn result_code(&self) -> Option<ResultCode> {
        ResultCode::from_i32(self.code)
    }

    pub fn is_success(&self) -> bool {
        self.code == ResultCode::Success.as_i32()
    }
}

impl ApiResponse<()> {
    /// Success without a payload
    pub fn done(locale: Locale) -> Self {
        Self {
            code: ResultCode::Success.as_i32(),
            message: locale.message(ResultCode::Success).to_string(),
            data: None,
        }
    }

    /// Payload-free outcome of an operation
    pub fn from_unit(result: AppResult<()>, locale: Locale) -> Self {
        match result {
            Ok(()) => Self::done(locale),
            Err(e) => Self::failure(&e, locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_data() {
        let response = ApiResponse::success(42, Locale::En);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"code": 0, "message": "Success", "data": 42}));
    }

    #[test]
    fn failure_omits_data() {
        let response: ApiResponse<u32> = ApiResponse::failure(&AppError::NotFound, Locale::Vi);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"code": -1, "message": "Không tồn tại"}));
    }

    #[test]
    fn validation_maps_to_invalid() {
        let response: ApiResponse<u32> =
            ApiResponse::from_result(Err(AppError::validation("Title is required")), Locale::Vi);
        assert_eq!(response.result_code(), Some(ResultCode::Invalid));
        assert_eq!(response.message, "Thông tin không hợp lệ");
    }

    #[test]
    fn unit_success_has_no_data() {
        let response = ApiResponse::from_unit(Ok(()), Locale::Vi);
        assert!(response.is_success());
        assert_eq!(response.message, "Thành công");
        assert!(response.data.is_none());
    }

    #[test]
    fn locale_parses_codes() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" vi ".parse::<Locale>(), Ok(Locale::Vi));
        assert!("fr".parse::<Locale>().is_err());
    }
}
