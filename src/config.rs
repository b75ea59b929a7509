pub const HOST_KEY: &'static str = "BODY_ECHO_HOST";
pub const PORT_KEY: &'static str = "BODY_ECHO_PORT";
pub const TEMPLATE_DIR_KEY: &'static str = "BODY_ECHO_TEMPLATE_DIR";

pub const DEFAULT_HOST: &'static str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TEMPLATE_DIR: &'static str = "templates";

use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub template_dir: String,
}

impl ServerConfig {
    /// Build the config from the environment, falling back to the defaults
    /// above for anything unset. CLI overrides win over the environment.
    pub fn from_env(host_override: Option<String>, port_override: Option<u16>) -> Result<Self> {
        let host = match host_override {
            Some(host) => host,
            None => env::var(HOST_KEY).unwrap_or_else(|_| DEFAULT_HOST.to_string()),
        };
        let port = match port_override {
            Some(port) => port,
            None => match env::var(PORT_KEY) {
                Ok(raw) => raw.parse()?,
                Err(_) => DEFAULT_PORT,
            },
        };
        let template_dir =
            env::var(TEMPLATE_DIR_KEY).unwrap_or_else(|_| DEFAULT_TEMPLATE_DIR.to_string());
        Ok(Self {
            host,
            port,
            template_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let config = ServerConfig::from_env(Some("127.0.0.1".to_string()), Some(8081)).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
    }
}
