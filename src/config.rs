/*
 * Responsibility
 * - Read environment / .env (PORT, HOST, APP_ENV, INSTANCE_ID, ...)
 * - Resolve the instance id exactly once (INSTANCE_ID, else host name)
 * - Fail startup when a value cannot be resolved
 */
use std::ffi::OsString;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("failed to resolve host name: {0}")]
    Hostname(#[source] io::Error),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub instance_id: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let host: IpAddr = std::env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HOST"))?;

        let addr = SocketAddr::new(host, port);

        let app_env = AppEnv::from_env();

        let instance_id = resolve_instance_id(std::env::var("INSTANCE_ID").ok(), hostname::get)?;

        let request_timeout = Duration::from_secs(
            std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        );

        Ok(Self {
            addr,
            app_env,
            instance_id,
            request_timeout,
        })
    }
}

/// Picks the instance id: a non-empty `INSTANCE_ID` verbatim, otherwise the host name.
///
/// The host name lookup only runs when the env value is absent or empty.
/// A host name that is not valid UTF-8 is decoded lossily.
pub fn resolve_instance_id<F>(from_env: Option<String>, hostname: F) -> Result<String, ConfigError>
where
    F: FnOnce() -> io::Result<OsString>,
{
    if let Some(id) = from_env
        && !id.is_empty()
    {
        return Ok(id);
    }

    let name = hostname().map_err(ConfigError::Hostname)?;
    Ok(name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_abc() -> io::Result<OsString> {
        Ok(OsString::from("host-abc"))
    }

    #[test]
    fn instance_id_from_env_is_used_verbatim() {
        let id = resolve_instance_id(Some("worker-7".to_string()), host_abc).unwrap();
        assert_eq!(id, "worker-7");
    }

    #[test]
    fn instance_id_falls_back_to_hostname_when_unset() {
        let id = resolve_instance_id(None, host_abc).unwrap();
        assert_eq!(id, "host-abc");
    }

    #[test]
    fn instance_id_falls_back_to_hostname_when_empty() {
        let id = resolve_instance_id(Some(String::new()), host_abc).unwrap();
        assert_eq!(id, "host-abc");
    }

    #[test]
    fn whitespace_instance_id_is_kept() {
        let id = resolve_instance_id(Some("  ".to_string()), host_abc).unwrap();
        assert_eq!(id, "  ");
    }

    #[test]
    fn hostname_not_queried_when_env_set() {
        let id = resolve_instance_id(Some("worker-1".to_string()), || {
            panic!("hostname lookup should not run")
        })
        .unwrap();
        assert_eq!(id, "worker-1");
    }

    #[test]
    fn hostname_failure_is_reported() {
        let err = resolve_instance_id(None, || Err(io::Error::other("boom"))).unwrap_err();
        assert!(matches!(err, ConfigError::Hostname(_)));
        assert_eq!(err.to_string(), "failed to resolve host name: boom");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_hostname_is_decoded_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let id = resolve_instance_id(None, || Ok(OsString::from_vec(vec![b'h', 0xff]))).unwrap();
        assert_eq!(id, "h\u{fffd}");
    }

    #[test]
    fn app_env_parsing() {
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert!(!AppEnv::parse("").is_production());
    }
}
