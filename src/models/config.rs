//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    /// Artificial delay added to API responses so loading states stay
    /// visible against the in-memory store. Zero disables it.
    #[serde(default)]
    pub mock_latency_ms: u64,
}
