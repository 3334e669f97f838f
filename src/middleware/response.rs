use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::filter::Pagination;

/// Response body shared by every endpoint:
/// `{success, data?, message?, page?, pageSize?, count?}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Wrapper for successful API responses that adds the envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub envelope: Envelope<T>,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    /// Create an API response with custom status code
    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            envelope: Envelope {
                success: true,
                data: Some(data),
                message: None,
                page: None,
                page_size: None,
                count: None,
            },
            status_code,
        }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.envelope.message = Some(message.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// List response; page counters are only set when the list was paginated
    pub fn list(records: Vec<T>, pagination: Option<Pagination>) -> Self {
        let count = records.len();
        let mut response = Self::success(records);
        if let Some(pagination) = pagination {
            response.envelope.page = Some(pagination.page);
            response.envelope.page_size = Some(pagination.page_size);
            response.envelope.count = Some(count);
        }
        response
    }
}

impl ApiResponse<()> {
    /// Success without a payload, e.g. after a delete
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            envelope: Envelope {
                success: true,
                data: None,
                message: Some(message.into()),
                page: None,
                page_size: None,
                count: None,
            },
            status_code: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_value(&self.envelope) {
            Ok(body) => (self.status_code, Json(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to serialize response data",
                        "code": "INTERNAL_SERVER_ERROR"
                    })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
