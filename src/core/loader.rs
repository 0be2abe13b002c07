use crate::core::{ConfigProvider, ProfileSource};
use crate::domain::model::Profile;
use crate::utils::error::{ProfileError, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PROFILE_PATH: &str = "data/profile.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fetches `profile.json` with a single uncached GET.
#[derive(Debug, Clone)]
pub struct HttpProfileLoader {
    client: Client,
    url: String,
}

impl HttpProfileLoader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let url = resolve_profile_url(config.base_url(), config.profile_path())?;
        Self::new(url, Duration::from_secs(config.timeout_seconds()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProfileSource for HttpProfileLoader {
    async fn load(&self) -> Result<Profile> {
        tracing::debug!("Fetching profile from: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Profile response status: {}", status);

        if !status.is_success() {
            return Err(ProfileError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let profile = Profile::from_slice(&body)?;
        tracing::info!("📥 Loaded profile ({} bytes)", body.len());
        Ok(profile)
    }
}

/// Join the relative profile path onto the site's base URL.
///
/// The base is treated as a directory even without a trailing slash, so
/// `http://host/cv` + `data/profile.json` gives `http://host/cv/data/profile.json`.
pub fn resolve_profile_url(base_url: &str, profile_path: &str) -> Result<String> {
    let invalid = |reason: String| ProfileError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason,
    };

    let mut base = Url::parse(base_url).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let url = base
        .join(profile_path)
        .map_err(|e| invalid(format!("Cannot join '{}': {}", profile_path, e)))?;
    Ok(url.to_string())
}
