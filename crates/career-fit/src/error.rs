use crate::assessment::{ResponseError, SessionError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Request(JsonRejection),
    Json(serde_json::Error),
    Responses(ResponseError),
    Session(SessionError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Request(err) => write!(f, "invalid request body: {}", err.body_text()),
            AppError::Json(err) => write!(f, "invalid json: {}", err),
            AppError::Responses(err) => write!(f, "rejected responses: {}", err),
            AppError::Session(err) => write!(f, "assessment session error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Request(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Responses(err) => Some(err),
            AppError::Session(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Responses(_) | AppError::Session(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Request(rejection) => rejection.status(),
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::Request(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ResponseError> for AppError {
    fn from(value: ResponseError) -> Self {
        Self::Responses(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_responses_map_to_unprocessable() {
        let error = AppError::from(ResponseError::UnknownQuestion("q99".to_string()));
        assert_eq!(
            error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn malformed_json_maps_to_bad_request() {
        let parse = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let error = AppError::from(parse);
        assert!(error.to_string().starts_with("invalid json"));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn payload_rejections_keep_the_extractor_status() {
        use axum::body::Body;
        use axum::extract::FromRequest;
        use axum::http::Request;

        let request = Request::post("/api/v1/assessment/results")
            .body(Body::from("{}"))
            .expect("request");
        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .expect_err("missing content type rejected");

        let error = AppError::from(rejection);
        assert!(error.to_string().starts_with("invalid request body: "));
        assert_eq!(
            error.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn infrastructure_failures_are_internal() {
        let error = AppError::from(ConfigError::InvalidPort("x".to_string()));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
