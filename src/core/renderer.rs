use crate::core::dom::{Document, NodeId};
use crate::core::shell::PageShell;
use crate::core::Pipeline;
use crate::utils::error::{ProfileError, Result};

pub const DIAGNOSTIC_HEADING: &str = "Failed to load profile";

/// Runs load → bind → write once, and owns the only error handler.
pub struct PageRenderer<P: Pipeline> {
    pipeline: P,
    shell: PageShell,
}

impl<P: Pipeline> PageRenderer<P> {
    pub fn new(pipeline: P, shell: PageShell) -> Self {
        Self { pipeline, shell }
    }

    /// Render the page and write it out.
    ///
    /// On failure the diagnostic page is written instead and the original
    /// error is returned.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting page render...");
        let mut page = self.shell.build();

        match self.populate(&mut page).await {
            Ok(()) => {
                let output_path = self.pipeline.load(&page).await?;
                tracing::info!("Page saved to: {}", output_path);
                Ok(output_path)
            }
            Err(e) => {
                tracing::error!("❌ Render failed: {}", e);
                show_diagnostic(&mut page, &e);
                match self.pipeline.load(&page).await {
                    Ok(path) => tracing::warn!("Diagnostic page saved to: {}", path),
                    Err(write_err) => {
                        tracing::error!("Could not write diagnostic page: {}", write_err)
                    }
                }
                Err(e)
            }
        }
    }

    /// Everything between the fresh shell and a fully bound page.
    pub async fn render(&self) -> std::result::Result<Document, (Document, ProfileError)> {
        let mut page = self.shell.build();
        match self.populate(&mut page).await {
            Ok(()) => Ok(page),
            Err(e) => {
                show_diagnostic(&mut page, &e);
                Err((page, e))
            }
        }
    }

    async fn populate(&self, page: &mut Document) -> Result<()> {
        tracing::info!("Loading profile...");
        let profile = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded profile for '{}' ({} projects, {} skills)",
            profile.name,
            profile.projects.len(),
            profile.skills.len()
        );

        tracing::info!("Binding profile into page...");
        self.pipeline.transform(profile, page).await
    }
}

/// Replace the whole body with the error panel. Nothing that was bound survives.
pub fn show_diagnostic(page: &mut Document, error: &ProfileError) -> NodeId {
    let heading = page.el("h1", &[], vec![DIAGNOSTIC_HEADING.into()]);
    let code = page.el("code", &[], vec!["data/profile.json".into()]);
    let hint = page.el(
        "p",
        &[],
        vec![
            "Check ".into(),
            code.into(),
            " and run via a local server (not file://).".into(),
        ],
    );
    let detail = page.el("pre", &[], vec![error.to_string().into()]);
    let panel = page.el(
        "div",
        &[(
            "style",
            "padding:24px; font-family: system-ui; color:#111; background:#fff",
        )],
        vec![heading.into(), hint.into(), detail.into()],
    );
    page.replace_body(panel);
    panel
}
