// src/fapshi.rs
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SANDBOX_BASE_URL: &str = "https://api.fapshi.com/sandbox";
pub const PRODUCTION_BASE_URL: &str = "https://api.fapshi.com";

/// Value of `NODE_ENV` that selects the production gateway.
pub const PRODUCTION_MARKER: &str = "production";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FapshiEnvironment {
    Sandbox,
    Production,
}

impl FapshiEnvironment {
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(PRODUCTION_MARKER) => FapshiEnvironment::Production,
            _ => FapshiEnvironment::Sandbox,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FapshiEnvironment::Sandbox => "sandbox",
            FapshiEnvironment::Production => "production",
        }
    }
}

impl fmt::Display for FapshiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BaseUrls {
    pub sandbox: &'static str,
    pub production: &'static str,
}

impl BaseUrls {
    pub fn for_environment(&self, environment: FapshiEnvironment) -> &'static str {
        match environment {
            FapshiEnvironment::Sandbox => self.sandbox,
            FapshiEnvironment::Production => self.production,
        }
    }
}

pub const BASE_URLS: BaseUrls = BaseUrls {
    sandbox: SANDBOX_BASE_URL,
    production: PRODUCTION_BASE_URL,
};

// FAPSHI_-prefixed variables, keys lower-cased by envy
#[derive(Deserialize)]
struct CredentialVars {
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    api_user: String,
    #[serde(default)]
    webhook_url: String,
}

#[derive(Deserialize)]
struct RuntimeMarker {
    node_env: Option<String>,
}

#[derive(Clone)]
pub struct FapshiConfig {
    api_key: String,
    api_user: String,
    environment: FapshiEnvironment,
    webhook_url: String,
}

impl FapshiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        let credentials: CredentialVars = envy::prefixed("FAPSHI_").from_iter(vars.clone())?;
        let marker: RuntimeMarker = envy::from_iter(vars)?;

        Ok(Self {
            api_key: credentials.api_key,
            api_user: credentials.api_user,
            environment: FapshiEnvironment::from_marker(marker.node_env.as_deref()),
            webhook_url: credentials.webhook_url,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_user(&self) -> &str {
        &self.api_user
    }

    pub fn environment(&self) -> FapshiEnvironment {
        self.environment
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn base_urls(&self) -> BaseUrls {
        BASE_URLS
    }

    /// Base URL of the gateway for the configured environment.
    pub fn base_url(&self) -> &'static str {
        BASE_URLS.for_environment(self.environment)
    }

    /// Rejects a configuration that cannot authenticate against the gateway.
    /// A missing webhook URL is tolerated and only reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::Missing("FAPSHI_API_KEY"));
        }
        if self.api_user.is_empty() {
            return Err(ConfigError::Missing("FAPSHI_API_USER"));
        }
        if self.webhook_url.is_empty() {
            tracing::warn!("FAPSHI_WEBHOOK_URL is not set, payment notifications will not be delivered");
        }
        Ok(())
    }
}

impl fmt::Debug for FapshiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("FapshiConfig")
            .field("api_key", &api_key)
            .field("api_user", &self.api_user)
            .field("environment", &self.environment)
            .field("base_url", &self.base_url())
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}
