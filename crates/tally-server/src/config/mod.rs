//! Service config loader (strict parsing + env overrides).

pub mod schema;

use std::env;
use std::fs;
use std::path::Path;

use tally_core::error::{Result, TallyError};

pub use schema::{NotifySection, ServerSection, ServiceConfig, StoreSection};

/// Env var naming the config file.
pub const CONFIG_PATH_VAR: &str = "TALLY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "tally.yaml";

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| TallyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the config file if present (defaults otherwise), apply env overrides,
/// and validate. Called once at startup.
pub fn load() -> Result<ServiceConfig> {
    let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut cfg = if Path::new(&path).exists() {
        let s = fs::read_to_string(&path)
            .map_err(|e| TallyError::Internal(format!("read config failed: {e}")))?;
        load_from_str(&s)?
    } else {
        ServiceConfig::default()
    };
    apply_env(&mut cfg)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Env overrides: `PORT`, `WEBHOOK_URL`, `NOTIFY_KEYS`, `STORE_PATH`.
fn apply_env(cfg: &mut ServiceConfig) -> Result<()> {
    if let Ok(port) = env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| TallyError::BadRequest(format!("PORT must be an integer: {port}")))?;
        let host = cfg
            .server
            .listen
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".into());
        cfg.server.listen = format!("{host}:{port}");
    }
    if let Ok(url) = env::var("WEBHOOK_URL") {
        cfg.notify.webhook_url = Some(url);
    }
    if let Ok(keys) = env::var("NOTIFY_KEYS") {
        cfg.notify.keys = keys;
    }
    if let Ok(path) = env::var("STORE_PATH") {
        cfg.store.path = path;
    }
    Ok(())
}
