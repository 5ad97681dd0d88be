// SPDX-License-Identifier: Apache-2.0
use std::env;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Initialize the tracing subscriber for the relay.
///
/// Uses a readable console formatter by default; set `LOG_FORMAT=json` for
/// Bunyan-style JSON lines suitable for log shippers.
pub fn init_tracing(name: &str) {
    // Skip setting LogTracer if it's already been set
    let _ = LogTracer::init();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{name}=info,actix_web=info")));

    let json = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let formatting_layer = BunyanFormattingLayer::new(name.into(), std::io::stdout);
        let subscriber = Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(formatting_layer);
        set_global_default(subscriber).expect("Failed to set tracing subscriber");
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_target(true)
            .with_level(true)
            .with_env_filter(env_filter)
            .finish();
        set_global_default(subscriber).expect("Failed to set tracing subscriber");
    }

    tracing::info!("Tracing initialized");
}
