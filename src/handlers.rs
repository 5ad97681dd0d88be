// SPDX-License-Identifier: Apache-2.0
use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::booking::BookingNotification;
use crate::config::MailConfig;
use crate::error::RelayError;
use crate::mailer::send_booking_confirmation;

#[derive(Debug, Serialize)]
struct SendEmailResponse {
    ok: bool,
    #[serde(rename = "messageId")]
    message_id: String,
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json("Sevamail is running")
}

/// `POST /api/send-email` — validate the booking payload, render the
/// confirmation, and push it through one SMTP session.
async fn send_email(
    payload: web::Json<Value>,
    config: web::Data<MailConfig>,
) -> Result<HttpResponse, RelayError> {
    let booking = BookingNotification::from_payload(&payload).inspect_err(|_| {
        warn!("rejected booking payload with missing or blank fields");
    })?;

    match send_booking_confirmation(&config, &booking) {
        Ok(message_id) => Ok(HttpResponse::Ok().json(SendEmailResponse {
            ok: true,
            message_id,
        })),
        Err(err) => {
            error!(booking_id = %booking.booking_id, error = %err, "booking email failed");
            Err(err)
        }
    }
}

/// Route table shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/health").route(web::get().to(health_check)))
        .service(web::resource("/api/send-email").route(web::post().to(send_email)));
}

/// Malformed JSON is the caller's fault: answer 400 with the parse error
/// instead of letting it surface as a 500.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        InternalError::from_response(err, response).into()
    })
}
