//! Gateway configuration. Load from TOML or env.
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | app_name | SCAMSCAN__APP_NAME | ScamScan Gateway | Application identity shown on pages and /api/v1/health. |
//! | port | SCAMSCAN__PORT | 8000 | HTTP port for the gateway. |
//! | keywords_path | SCAMSCAN__KEYWORDS_PATH | scam_words.txt | Newline-delimited scam word list, reloaded per scoring request. |
//! | spool_dir | SCAMSCAN__SPOOL_DIR | ./data/spool | Directory for per-request audio spool files (removed after each request). |

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global application configuration for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Application identity (e.g. "ScamScan Gateway").
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Path to the newline-delimited scam word list.
    pub keywords_path: String,
    /// Directory where uploaded audio is spooled for the duration of a request.
    pub spool_dir: String,
}

impl GatewayConfig {
    /// Load config from file and environment.
    /// Precedence: env `SCAMSCAN_CONFIG` path > `config/gateway.toml` > defaults,
    /// then `SCAMSCAN`-prefixed environment variables (separator `__`) on top.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("SCAMSCAN_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "ScamScan Gateway")?
            .set_default("port", 8000_i64)?
            .set_default("keywords_path", "scam_words.txt")?
            .set_default("spool_dir", "./data/spool")?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("SCAMSCAN").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            app_name: "ScamScan Gateway".to_string(),
            port: 8000,
            keywords_path: "scam_words.txt".to_string(),
            spool_dir: "./data/spool".to_string(),
        }
    }
}
