// Uploader configuration: endpoint per provider and HTTP client settings.
// Defaults match the public services; every value can be overridden from
// the environment, which is mostly useful for pointing at a local mirror.

use crate::provider::Provider;
use std::collections::HashMap;
use std::time::Duration;

const ENV_PREFIX: &str = "PARTICEPS_";

#[derive(Debug, Clone)]
pub struct UploaderConfig {
    endpoints: HashMap<Provider, String>,
    pub user_agent: String,
    /// No timeout unless the caller asks for one.
    pub timeout: Option<Duration>,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        UploaderConfig {
            endpoints: Provider::ALL
                .iter()
                .map(|p| (*p, p.default_endpoint().to_string()))
                .collect(),
            user_agent: format!("particeps/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl UploaderConfig {
    /// Read overrides from `PARTICEPS_<PROVIDER>_URL` and
    /// `PARTICEPS_TIMEOUT_SECS`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = UploaderConfig::default();
        for provider in Provider::ALL {
            let key = format!("{}{}_URL", ENV_PREFIX, provider.env_key());
            if let Some(url) = lookup(&key).filter(|v| !v.trim().is_empty()) {
                config.set_endpoint(provider, url.trim());
            }
        }
        let timeout_key = format!("{}TIMEOUT_SECS", ENV_PREFIX);
        if let Some(raw) = lookup(&timeout_key) {
            match raw.trim().parse::<u64>() {
                Ok(0) => {}
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!("ignoring {}={:?}: not a number of seconds", timeout_key, raw),
            }
        }
        config
    }

    pub fn endpoint(&self, provider: Provider) -> &str {
        self.endpoints
            .get(&provider)
            .map(String::as_str)
            .unwrap_or_else(|| provider.default_endpoint())
    }

    pub fn set_endpoint(&mut self, provider: Provider, url: impl Into<String>) {
        self.endpoints.insert(provider, url.into());
    }

    pub fn with_endpoint(mut self, provider: Provider, url: impl Into<String>) -> Self {
        self.set_endpoint(provider, url);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UploaderConfig::default();
        for provider in Provider::ALL {
            assert_eq!(config.endpoint(provider), provider.default_endpoint());
        }
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("particeps/"));
    }

    #[test]
    fn test_overrides() {
        let config = UploaderConfig::from_lookup(|key| match key {
            "PARTICEPS_FILEBIN_URL" => Some(" http://localhost:8080 ".into()),
            "PARTICEPS_IMAGEBIN_URL" => Some("".into()),
            "PARTICEPS_TIMEOUT_SECS" => Some("30".into()),
            _ => None,
        });
        assert_eq!(config.endpoint(Provider::Filebin), "http://localhost:8080");
        assert_eq!(
            config.endpoint(Provider::Imagebin),
            Provider::Imagebin.default_endpoint()
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_bad_timeout_is_ignored() {
        let config = UploaderConfig::from_lookup(|key| {
            (key == "PARTICEPS_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(config.timeout.is_none());
    }
}
