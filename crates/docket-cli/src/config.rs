//! Server configuration resolved at startup.

use std::net::{IpAddr, SocketAddr};

use anyhow::{anyhow, Context, Result};
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

/// Environment variable holding the flash cookie signing secret.
pub const SECRET_ENV: &str = "SECRET_KEY";

/// Validated server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    secret_key: String,
}

impl ServerConfig {
    /// Builds the configuration, failing when the secret is missing or
    /// empty.
    pub fn new(bind: &str, port: u16, secret_key: Option<String>) -> Result<Self> {
        let secret_key = secret_key
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| anyhow!("No {SECRET_ENV} set for docket"))?;

        let ip: IpAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address {bind}"))?;
        let bind_addr = SocketAddr::new(ip, port);

        Ok(Self {
            bind_addr,
            secret_key,
        })
    }

    /// Reads the secret from the process environment.
    pub fn from_env(bind: &str, port: u16) -> Result<Self> {
        Self::new(bind, port, std::env::var(SECRET_ENV).ok())
    }

    /// Derives the cookie signing key from the secret.
    pub fn cookie_key(&self) -> Key {
        let digest = Sha512::digest(self.secret_key.as_bytes());
        Key::from(digest.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_fatal() {
        let err = ServerConfig::new("127.0.0.1", 5000, None).err().unwrap();
        assert!(err.to_string().contains(SECRET_ENV));
    }

    #[test]
    fn test_empty_secret_is_fatal() {
        assert!(ServerConfig::new("127.0.0.1", 5000, Some(String::new())).is_err());
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = ServerConfig::new("not an address", 5000, Some("s3cret".to_string()))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Invalid bind address"));
    }

    #[test]
    fn test_ipv6_bind_address() {
        let config = ServerConfig::new("::1", 5000, Some("s3cret".to_string())).unwrap();
        assert!(config.bind_addr.is_ipv6());
        assert_eq!(config.bind_addr.to_string(), "[::1]:5000");
    }

    #[test]
    fn test_cookie_key_is_stable() {
        let a = ServerConfig::new("127.0.0.1", 5000, Some("s3cret".to_string())).unwrap();
        let b = ServerConfig::new("0.0.0.0", 8080, Some("s3cret".to_string())).unwrap();
        let c = ServerConfig::new("127.0.0.1", 5000, Some("other".to_string())).unwrap();

        assert_eq!(a.bind_addr.port(), 5000);
        assert_eq!(a.cookie_key().master(), b.cookie_key().master());
        assert_ne!(a.cookie_key().master(), c.cookie_key().master());
    }
}
