use rigwatch_core::reading::DecodePolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`, the port the device firmware targets).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How non-numeric telemetry values are handled (default: `loose`).
    pub decode_policy: DecodePolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `5000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `DECODE_POLICY`        | `loose`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let decode_policy: DecodePolicy = std::env::var("DECODE_POLICY")
            .unwrap_or_else(|_| "loose".into())
            .parse()
            .expect("DECODE_POLICY must be 'loose' or 'strict'");

        Self {
            host,
            port,
            request_timeout_secs,
            decode_policy,
        }
    }
}
