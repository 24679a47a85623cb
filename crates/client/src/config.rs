use std::env;

use reqwest::Url;

pub const BACKEND_URL_VAR: &str = "ZONING_BACKEND_URL";
pub const MAPTILER_KEY_VAR: &str = "ZONING_MAPTILER_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { var: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{var} is not set"),
            ConfigError::Invalid { var, reason } => write!(f, "{var} is invalid: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Startup configuration. Both values are required; there are no defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute http(s) base URL without a trailing slash.
    pub backend_url: String,
    /// API key for the dark basemap tiles.
    pub maptiler_key: String,
}

impl ClientConfig {
    pub fn new(backend_url: &str, maptiler_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: validate_backend_url(backend_url)?,
            maptiler_key: validate_key(maptiler_key)?,
        })
    }

    /// Explicit values win over the environment.
    pub fn resolve(
        backend_url: Option<String>,
        maptiler_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(backend_url, maptiler_key, |var| env::var(var).ok())
    }

    pub fn resolve_with(
        backend_url: Option<String>,
        maptiler_key: Option<String>,
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let backend_url = backend_url
            .or_else(|| lookup(BACKEND_URL_VAR))
            .ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
        let maptiler_key = maptiler_key
            .or_else(|| lookup(MAPTILER_KEY_VAR))
            .ok_or(ConfigError::Missing(MAPTILER_KEY_VAR))?;
        Self::new(&backend_url, &maptiler_key)
    }
}

fn validate_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Missing(BACKEND_URL_VAR));
    }
    let url = Url::parse(trimmed).map_err(|e| ConfigError::Invalid {
        var: BACKEND_URL_VAR,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            var: BACKEND_URL_VAR,
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::Invalid {
            var: BACKEND_URL_VAR,
            reason: "must not carry a query or fragment".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_key(raw: &str) -> Result<String, ConfigError> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(ConfigError::Missing(MAPTILER_KEY_VAR));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::{BACKEND_URL_VAR, ClientConfig, ConfigError, MAPTILER_KEY_VAR};

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&'static str) -> Option<String> {
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn reads_environment_and_trims_slash() {
        let cfg = ClientConfig::resolve_with(
            None,
            None,
            env_of(&[
                (BACKEND_URL_VAR, "http://localhost:8080/"),
                (MAPTILER_KEY_VAR, "abc"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.backend_url, "http://localhost:8080");
        assert_eq!(cfg.maptiler_key, "abc");
    }

    #[test]
    fn explicit_values_override_environment() {
        let cfg = ClientConfig::resolve_with(
            Some("https://zoning.example.com".to_string()),
            None,
            env_of(&[
                (BACKEND_URL_VAR, "http://localhost:8080"),
                (MAPTILER_KEY_VAR, "abc"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.backend_url, "https://zoning.example.com");
    }

    #[test]
    fn missing_values_fail_fast() {
        let err = ClientConfig::resolve_with(None, None, env_of(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(BACKEND_URL_VAR));

        let err = ClientConfig::resolve_with(
            None,
            None,
            env_of(&[(BACKEND_URL_VAR, "http://localhost:8080")]),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(MAPTILER_KEY_VAR));
        assert_eq!(err.to_string(), "ZONING_MAPTILER_KEY is not set");
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(matches!(
            ClientConfig::new("localhost:8080", "k"),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com", "k"),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            ClientConfig::new("not a url", "k"),
            Err(ConfigError::Invalid { .. })
        ));
        assert_eq!(
            ClientConfig::new("   ", "k"),
            Err(ConfigError::Missing(BACKEND_URL_VAR))
        );
    }
}
