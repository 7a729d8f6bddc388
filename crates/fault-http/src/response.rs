use axum::{
    Json,
    response::{IntoResponse, Response},
};
use fault_core::{Fault, HttpError, Service};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// JSON body sent to clients when a request fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code combining kind, sub-service and owning service
    pub code: i32,
    /// Canonical reason phrase of the response status
    pub name: String,
    /// Classification label, e.g. `ATB HTTP Not Found Error`
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// A failed request, ready to be returned from an axum handler
///
/// Converting it into a response logs the full error chain once, sets the
/// status from the error's classification and writes an [`ErrorResponse`].
/// `204 No Content` carries no body.
#[derive(Debug)]
#[must_use]
pub struct FaultResponse<E = Fault> {
    error: E,
    service: Service,
    message: Option<String>,
    details: Vec<String>,
}

impl<E: HttpError> FaultResponse<E> {
    pub const fn new(error: E, service: Service) -> Self {
        Self {
            error,
            service,
            message: None,
            details: Vec::new(),
        }
    }

    /// Message safe to show to API consumers
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Additional detail line, e.g. a trace id
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn status(&self) -> StatusCode {
        self.error.status_code()
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error.error_code(self.service),
            name: self.status().canonical_reason().unwrap_or_default().to_owned(),
            description: self.error.label(),
            message: self.message.clone(),
            details: self.details.clone(),
        }
    }
}

impl<E: HttpError> IntoResponse for FaultResponse<E> {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::NO_CONTENT {
            tracing::debug!(error = %self.error, "request produced no content");
            return status.into_response();
        }

        let body = self.body();

        tracing::error!(
            status_code = status.as_u16(),
            error_code = body.code,
            details = ?body.details,
            error = %self.error,
            "request failed"
        );

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use fault_core::{Kind, SubService};

    use super::*;

    async fn read_body(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn not_found_body() {
        let fault = Fault::builder()
            .op("repository: find")
            .kind(Kind::HttpNotFound)
            .sub_service(SubService::Atb)
            .build();

        let response = FaultResponse::new(fault, Service::Sheazuzu)
            .message("match data not found")
            .detail("TraceID: abc")
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(
            body,
            ErrorResponse {
                code: 1_001_404,
                name: "Not Found".to_owned(),
                description: "ATB HTTP Not Found Error".to_owned(),
                message: Some("match data not found".to_owned()),
                details: vec!["TraceID: abc".to_owned()],
            }
        );
    }

    #[tokio::test]
    async fn no_content_has_empty_body() {
        let response = FaultResponse::new(Fault::new(Kind::HttpNoContent), Service::Sheazuzu).into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(read_body(response).await.is_empty());
    }

    #[tokio::test]
    async fn optional_fields_are_omitted() {
        let response = FaultResponse::new(Fault::message("boom"), Service::Sheazuzu).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": 1_000_000,
                "name": "Internal Server Error",
                "description": "Error",
            })
        );
    }
}
