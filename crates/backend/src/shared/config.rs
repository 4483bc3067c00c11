use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend (index.html + wasm)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

pub fn socket_addr(config: &Config) -> anyhow::Result<SocketAddr> {
    let raw = format!("{}:{}", config.server.host, config.server.port);
    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", raw, e))
}

/// Resolve the static directory
///
/// Absolute paths are used as is. A relative path is looked up next to the
/// executable first, then taken relative to the working directory.
pub fn resolve_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(dir);
            if candidate.is_dir() {
                return candidate;
            }
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = parse_config("[server]\nport = 8081\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_missing_server_section_is_error() {
        assert!(parse_config("").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = parse_config("[server]\nhost = \"127.0.0.1\"\nport = 3000\n").unwrap();
        assert_eq!(
            socket_addr(&config).unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );

        let bad = parse_config("[server]\nhost = \"not a host\"\n").unwrap();
        assert!(socket_addr(&bad).is_err());
    }

    #[test]
    fn test_absolute_static_dir_kept() {
        let abs = std::env::temp_dir().join("lung-scan-dist");
        let config = Config {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                static_dir: abs.to_string_lossy().into_owned(),
            },
        };
        assert_eq!(resolve_static_dir(&config), abs);
    }
}
