use crate::error::ConfigError;
use std::path::PathBuf;

/// Route of the hub snapshot endpoint.
pub const STATUS_PATH: &str = "/status";

/// Settings of the hub task.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Push `viewer-count` frames to camera channels.
    pub viewer_count: bool,
    /// Capacity of the hub command queue.
    pub command_buffer: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            viewer_count: true,
            command_buffer: 256,
        }
    }
}

/// Everything the HTTP/WebSocket layer needs to run.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Route of the upgrade endpoint.
    pub ws_path: String,
    /// Root of the static assets served on every other path.
    pub public_dir: PathBuf,
    /// Shared secret expected in the `token` query parameter.
    /// `None` leaves the upgrade endpoint open.
    pub auth_token: Option<String>,
    pub hub: HubConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ws_path: "/ws".to_owned(),
            public_dir: PathBuf::from("public"),
            auth_token: None,
            hub: HubConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let path = self.ws_path.as_str();
        // `/` would shadow the static index; `{`, `}`, `*` and `:` are route syntax.
        if !path.starts_with('/')
            || path == "/"
            || path == STATUS_PATH
            || path.contains(['{', '}', '*', ':'])
        {
            return Err(ConfigError::InvalidWsPath(self.ws_path.clone()));
        }
        if self.auth_token.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::MissingSecret);
        }
        Ok(())
    }

    /// Exact comparison against the configured secret.
    pub fn authorize(&self, token: Option<&str>) -> bool {
        match &self.auth_token {
            None => true,
            Some(expected) => token == Some(expected.as_str()),
        }
    }
}
