use crate::core::dom::{Document, NodeId};
use crate::utils::error::{ProfileError, Result};

/// Element IDs the binder writes into.
pub mod ids {
    pub const PAGE_TITLE: &str = "page-title";
    pub const NAME: &str = "name";
    pub const ROLE: &str = "role";
    pub const META: &str = "meta";
    pub const CTA: &str = "cta";
    pub const SUMMARY_TITLE: &str = "summary-title";
    pub const SUMMARY_HINT: &str = "summary-hint";
    pub const SUMMARY: &str = "summary";
    pub const SEA_HINT: &str = "sea-hint";
    pub const SEA_SERVICE: &str = "sea-service";
    pub const PROJECT_HINT: &str = "proj-hint";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const CERTIFICATES: &str = "certs";
    pub const EDUCATION: &str = "education";
    pub const HIGHLIGHTS_HINT: &str = "hl-hint";
    pub const HIGHLIGHTS: &str = "highlights";
    pub const PDF_HINT: &str = "pdf-hint";
    pub const PDF_LINK: &str = "pdf-link";
    pub const YEAR: &str = "y";
    pub const FOOTER_NAME: &str = "footer-name";

    pub const ALL: &[&str] = &[
        PAGE_TITLE,
        NAME,
        ROLE,
        META,
        CTA,
        SUMMARY_TITLE,
        SUMMARY_HINT,
        SUMMARY,
        SEA_HINT,
        SEA_SERVICE,
        PROJECT_HINT,
        PROJECTS,
        SKILLS,
        CERTIFICATES,
        EDUCATION,
        HIGHLIGHTS_HINT,
        HIGHLIGHTS,
        PDF_HINT,
        PDF_LINK,
        YEAR,
        FOOTER_NAME,
    ];
}

/// Handles to every region of the host page that the binder populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountPoints {
    pub page_title: NodeId,
    pub name: NodeId,
    pub role: NodeId,
    pub meta: NodeId,
    pub cta: NodeId,
    pub summary_title: NodeId,
    pub summary_hint: NodeId,
    pub summary: NodeId,
    pub sea_hint: NodeId,
    pub sea_service: NodeId,
    pub project_hint: NodeId,
    pub projects: NodeId,
    pub skills: NodeId,
    pub certificates: NodeId,
    pub education: NodeId,
    pub highlights_hint: NodeId,
    pub highlights: NodeId,
    pub pdf_hint: NodeId,
    pub pdf_link: NodeId,
    pub year: NodeId,
    pub footer_name: NodeId,
}

impl MountPoints {
    /// Look up every mount point by ID, failing on the first one that is missing.
    pub fn resolve(doc: &Document) -> Result<Self> {
        let find = |id: &str| {
            doc.get_element_by_id(id)
                .ok_or_else(|| ProfileError::MissingMount { id: id.to_string() })
        };

        Ok(Self {
            page_title: find(ids::PAGE_TITLE)?,
            name: find(ids::NAME)?,
            role: find(ids::ROLE)?,
            meta: find(ids::META)?,
            cta: find(ids::CTA)?,
            summary_title: find(ids::SUMMARY_TITLE)?,
            summary_hint: find(ids::SUMMARY_HINT)?,
            summary: find(ids::SUMMARY)?,
            sea_hint: find(ids::SEA_HINT)?,
            sea_service: find(ids::SEA_SERVICE)?,
            project_hint: find(ids::PROJECT_HINT)?,
            projects: find(ids::PROJECTS)?,
            skills: find(ids::SKILLS)?,
            certificates: find(ids::CERTIFICATES)?,
            education: find(ids::EDUCATION)?,
            highlights_hint: find(ids::HIGHLIGHTS_HINT)?,
            highlights: find(ids::HIGHLIGHTS)?,
            pdf_hint: find(ids::PDF_HINT)?,
            pdf_link: find(ids::PDF_LINK)?,
            year: find(ids::YEAR)?,
            footer_name: find(ids::FOOTER_NAME)?,
        })
    }
}
