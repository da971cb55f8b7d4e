use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre with the workspace configuration.
///
/// Call early in `main()`, before any fallible work. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn default_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=warn,mongodb=warn,h2=warn")
        } else {
            EnvFilter::new("debug,tower_http=debug,mongodb=info,h2=info,hyper=info,tower=info")
        }
    })
}

/// Initialize the global subscriber with an `ErrorLayer` for span capture.
///
/// - Production (`APP_ENV=production`): JSON lines, flattened events, no targets.
/// - Development: pretty output with file and line numbers.
///
/// `RUST_LOG` overrides the default filter. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter = default_filter(environment);

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!(?environment, "tracing initialized"),
        Err(_) => debug!("tracing already initialized, skipping"),
    }
}
