use crate::error::FarcallError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "otlp")]
use opentelemetry_otlp::WithExportConfig;

/// Configuration for the telemetry subsystem.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    service_name: String,
    otlp_endpoint: Option<String>,
    log_level: String,
}

impl TelemetryConfig {
    /// Creates a new configuration builder with default settings.
    pub fn builder() -> TelemetryConfigBuilder {
        TelemetryConfigBuilder::default()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn otlp_endpoint(&self) -> Option<&str> {
        self.otlp_endpoint.as_deref()
    }

    /// Installs the global subscriber: env filter, fmt output, and OTLP
    /// export when an endpoint is configured.
    pub fn init(self) -> Result<(), FarcallError> {
        let filter = tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .map_err(FarcallError::telemetry)?;

        #[cfg(feature = "otlp")]
        let otlp = match self.otlp_endpoint {
            Some(endpoint) => Some(otlp_layer(self.service_name, endpoint)?),
            None => None,
        };
        #[cfg(not(feature = "otlp"))]
        if self.otlp_endpoint.is_some() {
            return Err(FarcallError::telemetry(
                "OTLP endpoint configured but the `otlp` feature is disabled",
            ));
        }

        let registry = tracing_subscriber::registry();
        #[cfg(feature = "otlp")]
        let registry = registry.with(otlp);

        registry
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(FarcallError::telemetry)
    }
}

#[cfg(feature = "otlp")]
fn otlp_layer(
    service_name: String,
    endpoint: String,
) -> Result<
    tracing_opentelemetry::OpenTelemetryLayer<
        tracing_subscriber::Registry,
        opentelemetry_sdk::trace::Tracer,
    >,
    FarcallError,
> {
    opentelemetry::global::set_text_map_propagator(
        opentelemetry_sdk::propagation::TraceContextPropagator::new(),
    );

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(opentelemetry_sdk::trace::config().with_resource(
            opentelemetry_sdk::Resource::new(vec![opentelemetry::KeyValue::new(
                "service.name",
                service_name,
            )]),
        ))
        .install_batch(opentelemetry_sdk::runtime::Tokio)
        .map_err(FarcallError::telemetry)?;

    Ok(tracing_opentelemetry::layer().with_tracer(tracer))
}

/// Builder for `TelemetryConfig`.
#[derive(Default)]
pub struct TelemetryConfigBuilder {
    service_name: Option<String>,
    otlp_endpoint: Option<String>,
    log_level: Option<String>,
}

impl TelemetryConfigBuilder {
    /// Sets the service name reported to the collector.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Sets the OTLP endpoint URL. Without one, spans are not exported.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    /// Sets the filter directive (default: "info").
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> TelemetryConfig {
        TelemetryConfig {
            service_name: self
                .service_name
                .unwrap_or_else(|| "farcall-unknown".to_string()),
            otlp_endpoint: self.otlp_endpoint,
            log_level: self.log_level.unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Shuts down the telemetry subsystem, flushing pending spans.
pub fn shutdown() {
    #[cfg(feature = "otlp")]
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = TelemetryConfig::builder().build();
        assert_eq!(config.service_name(), "farcall-unknown");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.otlp_endpoint(), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TelemetryConfig::builder()
            .service_name("catalog-client")
            .endpoint("http://127.0.0.1:4317")
            .log_level("farcall=debug")
            .build();

        assert_eq!(config.service_name(), "catalog-client");
        assert_eq!(config.log_level(), "farcall=debug");
        assert_eq!(config.otlp_endpoint(), Some("http://127.0.0.1:4317"));
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let err = TelemetryConfig::builder()
            .log_level("farcall=loud")
            .build()
            .init()
            .unwrap_err();
        assert!(matches!(err, FarcallError::Telemetry(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
