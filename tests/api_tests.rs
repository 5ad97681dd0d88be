// SPDX-License-Identifier: Apache-2.0
use actix_web::{App, test, web};
use serde_json::{Value, json};

use sevamail::config::MailConfig;
use sevamail::handlers::configure;

/// Config pointing at a closed local port so a send attempt fails fast
/// instead of reaching a real mail server.
fn unreachable_config() -> MailConfig {
    MailConfig {
        smtp_host: "127.0.0.1".into(),
        smtp_port: 9,
        smtp_user: "no-reply@sabarisastha.org".into(),
        smtp_pass: "wrong-password".into(),
        from_email: "no-reply@sabarisastha.org".into(),
        from_name: "Sabari Sastha Seva Samithi".into(),
        bcc: None,
    }
}

fn valid_payload() -> Value {
    json!({
        "name": "Ravi",
        "email": "ravi@example.com",
        "bookingType": "Pooja",
        "date": "2024-01-01",
        "slot": "Morning",
        "bookingId": "B123"
    })
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(unreachable_config()))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_endpoint_responds() {
    let app = init_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn missing_field_is_rejected_with_the_fixed_body() {
    let app = init_app!();

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("slot");

    let req = test::TestRequest::post()
        .uri("/api/send-email")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[actix_web::test]
async fn whitespace_only_field_is_rejected() {
    let app = init_app!();

    let mut payload = valid_payload();
    payload["email"] = json!("   ");

    let req = test::TestRequest::post()
        .uri("/api/send-email")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing required fields");
}

#[actix_web::test]
async fn malformed_json_is_a_client_error() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/send-email")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not valid json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn transport_failure_surfaces_as_500() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/send-email")
        .set_json(&valid_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], json!(false));
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn only_post_is_accepted_on_the_send_route() {
    let app = init_app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/send-email").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 405);
}
