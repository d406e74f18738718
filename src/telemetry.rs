use std::sync::Once;

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};
use crate::error::AppError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber writing to stderr, so stdout stays
/// free for command output.
pub fn init(logging: &LoggingSettings) -> Result<(), AppError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| AppError::telemetry(format!("failed to install tracing subscriber: {err}")))
}

pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "ucsb_admin_query_hit_total",
            Unit::Count,
            "Total number of query reads served from a fresh cache entry."
        );
        describe_counter!(
            "ucsb_admin_query_miss_total",
            Unit::Count,
            "Total number of query reads that started a fetch."
        );
        describe_counter!(
            "ucsb_admin_query_error_total",
            Unit::Count,
            "Total number of failed query fetches."
        );
        describe_counter!(
            "ucsb_admin_cache_invalidate_total",
            Unit::Count,
            "Total number of cache keys invalidated."
        );
        describe_counter!(
            "ucsb_admin_mutation_total",
            Unit::Count,
            "Total number of mutations, labelled by outcome."
        );
    });
}
