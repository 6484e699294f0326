use opentelemetry::{global, trace::TracerProvider};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig, TelemetryConfig};
use crate::otel::{self, Providers};

/// Installs the global subscriber. When telemetry is enabled the OTLP
/// providers are returned so the caller can flush them on shutdown.
pub fn init_telemetry(
    logging: &LoggingConfig,
    telemetry: &TelemetryConfig,
) -> anyhow::Result<Option<Providers>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let providers = if telemetry.enabled {
        let providers = otel::init_providers(telemetry)?;
        global::set_text_map_propagator(TraceContextPropagator::new());
        global::set_tracer_provider(providers.tracer.clone());
        global::set_meter_provider(providers.meter.clone());
        Some(providers)
    } else {
        None
    };

    let otel_layer = providers.as_ref().map(|providers| {
        let tracer = providers.tracer.tracer(telemetry.service_name.clone());
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    let registry = tracing_subscriber::registry().with(filter).with(otel_layer);

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE))
            .init(),
    }

    tracing::info!(
        otel = telemetry.enabled,
        "Logging initialized with level: {}",
        logging.level
    );

    Ok(providers)
}
