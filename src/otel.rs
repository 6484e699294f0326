use anyhow::Context;
use opentelemetry_otlp::{MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, metrics::SdkMeterProvider, trace::SdkTracerProvider};

use crate::config::TelemetryConfig;

pub struct Providers {
    pub tracer: SdkTracerProvider,
    pub meter: SdkMeterProvider,
}

pub fn init_providers(config: &TelemetryConfig) -> anyhow::Result<Providers> {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .build();

    let mut span_exporter = SpanExporter::builder().with_tonic();
    if let Some(endpoint) = &config.otlp_endpoint {
        span_exporter = span_exporter.with_endpoint(endpoint.clone());
    }
    let span_exporter = span_exporter
        .build()
        .context("Failed to create OTLP span exporter")?;

    let tracer = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();

    let mut metric_exporter = MetricExporter::builder().with_tonic();
    if let Some(endpoint) = &config.otlp_endpoint {
        metric_exporter = metric_exporter.with_endpoint(endpoint.clone());
    }
    let metric_exporter = metric_exporter
        .build()
        .context("Failed to create OTLP metric exporter")?;

    let meter = SdkMeterProvider::builder()
        .with_periodic_exporter(metric_exporter)
        .with_resource(resource)
        .build();

    Ok(Providers { tracer, meter })
}

impl Providers {
    /// Flushes pending spans and metrics.
    pub fn shutdown(self) {
        if let Err(err) = self.tracer.shutdown() {
            tracing::warn!("Failed to shut down tracer provider: {err}");
        }
        if let Err(err) = self.meter.shutdown() {
            tracing::warn!("Failed to shut down meter provider: {err}");
        }
    }
}
