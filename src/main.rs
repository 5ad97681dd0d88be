use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use sevamail::config::MailConfig;
use sevamail::handlers::configure;
use sevamail::logging::init_tracing;

const BIND_ADDR: &str = "0.0.0.0:8000";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing("sevamail");

    // Credentials are checked here, once; a misconfigured relay never binds.
    let config = MailConfig::from_env().map_err(|err| {
        tracing::error!(error = %err, "refusing to start without a usable SMTP configuration");
        std::io::Error::other(err.to_string())
    })?;
    tracing::info!(
        smtp_host = %config.smtp_host,
        smtp_port = config.smtp_port,
        from = %config.from_email,
        bcc_configured = config.bcc.is_some(),
        "starting booking confirmation relay"
    );

    let mail_config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(mail_config.clone())
            .configure(configure)
    })
    .bind(BIND_ADDR)?
    .run()
    .await
}
