use crate::core::binder::Binder;
use crate::core::dom::Document;
use crate::core::mounts::MountPoints;
use crate::core::{ConfigProvider, Pipeline, ProfileSource, Storage};
use crate::domain::model::Profile;
use crate::utils::error::Result;
use std::path::Path;

/// Load a profile, bind it into the page, write the page through `Storage`.
pub struct PagePipeline<L: ProfileSource, S: Storage, C: ConfigProvider> {
    source: L,
    storage: S,
    config: C,
    binder: Binder,
}

impl<L: ProfileSource, S: Storage, C: ConfigProvider> PagePipeline<L, S, C> {
    pub fn new(source: L, storage: S, config: C) -> Self {
        let binder = match config.year() {
            Some(year) => Binder::new(year),
            None => Binder::current_year(),
        };
        Self {
            source,
            storage,
            config,
            binder,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<L: ProfileSource, S: Storage, C: ConfigProvider> Pipeline for PagePipeline<L, S, C> {
    async fn extract(&self) -> Result<Profile> {
        self.source.load().await
    }

    async fn transform(&self, profile: Profile, page: &mut Document) -> Result<()> {
        let mounts = MountPoints::resolve(page)?;
        self.binder.bind(page, &mounts, &profile);
        Ok(())
    }

    async fn load(&self, page: &Document) -> Result<String> {
        let html = page.to_html();
        tracing::debug!(
            "Writing {} ({} bytes) to storage",
            self.config.output_file(),
            html.len()
        );
        self.storage
            .write_file(self.config.output_file(), html.as_bytes())
            .await?;

        let output_path = Path::new(self.config.output_path()).join(self.config.output_file());
        Ok(output_path.display().to_string())
    }
}
