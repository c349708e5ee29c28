use serde::Deserialize;
use tally_core::error::{Result, TallyError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub notify: NotifySection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<std::net::SocketAddr>()
            .map_err(|_| {
                TallyError::BadRequest(format!(
                    "server.listen must be a socket address: {}",
                    self.listen
                ))
            })?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Snapshot file path. An empty string selects the in-memory store.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifySection {
    /// Webhook destination. Absent disables notification.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Comma-separated keys eligible for notification. Empty disables
    /// notification regardless of the destination.
    #[serde(default)]
    pub keys: String,
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_store_path() -> String {
    "tally-store.json".into()
}
