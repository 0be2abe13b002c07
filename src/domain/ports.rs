use crate::core::dom::Document;
use crate::domain::model::Profile;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Site root the profile path is resolved against.
    fn base_url(&self) -> &str;
    fn profile_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn stylesheet(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    /// Overrides the footer year; `None` means the current year.
    fn year(&self) -> Option<i32>;
}

/// Where a profile comes from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn load(&self) -> Result<Profile>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Profile>;
    async fn transform(&self, profile: Profile, page: &mut Document) -> Result<()>;
    async fn load(&self, page: &Document) -> Result<String>;
}
