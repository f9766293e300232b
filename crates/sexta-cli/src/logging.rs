//! Console logging setup.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize compact console logging for the CLI.
///
/// Log level comes from `LOG_LEVEL` (default: "info"); `RUST_LOG` takes
/// precedence when set. HTTP internals are filtered to warn.
pub fn init() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "sexta_cli={level},sexta_importer={level},sexta_supabase={level},reqwest=warn,hyper=warn",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
