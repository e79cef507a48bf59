//! Environment configuration for the Diligence server.

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server settings loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Built single-page app to serve for non-API routes.
    pub static_dir: Option<PathBuf>,
    /// Include failure details in 500 responses.
    pub expose_errors: bool,
}

impl ServerConfig {
    /// Build the configuration from process environment variables.
    #[cfg_attr(test, allow(dead_code))]
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DILIGENCE_HOST")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("DILIGENCE_PORT") {
            Some(raw) => u16::from_str(raw.trim()).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("DILIGENCE_PORT must be a u16 number, got {raw:?}"),
                )
            })?,
            None => DEFAULT_PORT,
        };

        let static_dir = match lookup("DILIGENCE_STATIC_DIR") {
            Some(raw) if !raw.trim().is_empty() => {
                let dir = PathBuf::from(raw.trim());
                if !dir.is_dir() {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!(
                            "could not find the client build directory: {}",
                            dir.display()
                        ),
                    ));
                }
                Some(dir)
            }
            _ => None,
        };

        let expose_errors = lookup("DILIGENCE_EXPOSE_ERRORS")
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            static_dir,
            expose_errors,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use std::collections::HashMap;
    use std::io;

    fn load(pairs: &[(&str, &str)]) -> io::Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).expect("config");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, None);
        assert!(!config.expose_errors);
    }

    #[test]
    fn reads_overrides() {
        let dir = std::env::temp_dir();
        let config = load(&[
            ("DILIGENCE_HOST", " 0.0.0.0 "),
            ("DILIGENCE_PORT", "5000"),
            ("DILIGENCE_STATIC_DIR", dir.to_str().expect("utf8 temp dir")),
            ("DILIGENCE_EXPOSE_ERRORS", "TRUE"),
        ])
        .expect("config");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.static_dir, Some(dir));
        assert!(config.expose_errors);
    }

    #[test]
    fn rejects_invalid_port() {
        let error = load(&[("DILIGENCE_PORT", "eighty")]).expect_err("invalid port");
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_missing_static_dir() {
        let error = load(&[("DILIGENCE_STATIC_DIR", "/definitely/not/a/build/dir")])
            .expect_err("missing dir");
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
        assert!(error.to_string().contains("client build directory"));
    }

    #[test]
    fn truthy_flags_enable_error_details() {
        for value in ["1", "true", "Yes"] {
            let config = load(&[("DILIGENCE_EXPOSE_ERRORS", value)]).expect("config");
            assert!(config.expose_errors, "{value:?} should be truthy");
        }
    }

    #[test]
    fn falsy_flags_disable_error_details() {
        for value in ["0", "false", "no", "on", ""] {
            let config = load(&[("DILIGENCE_EXPOSE_ERRORS", value)]).expect("config");
            assert!(!config.expose_errors, "{value:?} should be falsy");
        }
    }
}
