// SPDX-License-Identifier: Apache-2.0
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong between receiving a booking payload and
/// handing the message to the SMTP server.
///
/// Each variant maps to exactly one HTTP status: client mistakes are 400,
/// anything on our side of the wire is 500.
#[derive(Debug, Error)]
pub enum RelayError {
    /// One of the six required booking fields is missing or blank.
    #[error("Missing required fields")]
    Validation,

    /// The request body was not valid JSON, or not a JSON object.
    #[error("invalid request body: {0}")]
    BadPayload(String),

    /// Required configuration is absent or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A mailbox address (from or to) failed to parse.
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// lettre refused to assemble the MIME message.
    #[error("failed to compose message: {0}")]
    Compose(#[from] lettre::error::Error),

    /// SMTP connect, authentication, or send failure.
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation | RelayError::BadPayload(_) => StatusCode::BAD_REQUEST,
            RelayError::Config(_) | RelayError::Address(_) | RelayError::Compose(_)
            | RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // The fixed body the booking frontend matches on.
            RelayError::Validation => {
                HttpResponse::BadRequest().json(json!({ "error": "Missing required fields" }))
            }
            RelayError::BadPayload(msg) => {
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
            other => HttpResponse::InternalServerError()
                .json(json!({ "ok": false, "error": other.to_string() })),
        }
    }
}
