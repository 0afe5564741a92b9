use serde::Deserialize;

/// Configuration options for the Tablebook service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub bind_address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}
