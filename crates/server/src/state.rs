use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use profile::Storage;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Deck data provider
    pub storage: Arc<dyn Storage>,

    /// Prometheus render handle, when a recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state without a metrics exporter
    pub fn new(config: ServerConfig, storage: Arc<dyn Storage>) -> Self {
        Self {
            config: Arc::new(config),
            storage,
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
