use crate::utils::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PAGE_TITLE: &str = "Resume";
pub const DEFAULT_SUMMARY_TITLE: &str = "Summary";
pub const DEFAULT_PDF_HREF: &str = "./resume.pdf";

/// Root of `profile.json`.
///
/// Every field may be absent or `null`. Defaults are filled in once by
/// [`Profile::from_slice`] / [`Profile::from_json_str`], so the binder can
/// read fields directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub page_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Vec<MetaPill>,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<LinkDescriptor>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary_hint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sea_hint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sea_service: Vec<SeaServiceRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub project_hint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certificates: Vec<Certificate>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights_hint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pdf_hint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pdf_href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub footer_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaPill {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Triggers the browser's print dialog instead of navigating.
    Print,
    #[default]
    #[serde(other)]
    External,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkDescriptor {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary: bool,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeaServiceRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub period: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vessel: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vessel_sub: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub: String,
    #[serde(deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub href_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    #[serde(deserialize_with = "null_as_default")]
    pub k: String,
    #[serde(deserialize_with = "null_as_default")]
    pub v: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub: String,
    #[serde(deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

impl Profile {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let profile: Profile = serde_json::from_slice(bytes)?;
        Ok(profile.with_defaults())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_slice(content.as_bytes())
    }

    /// Fill the text fields that have a non-empty fallback.
    pub fn with_defaults(mut self) -> Self {
        if self.page_title.is_empty() {
            self.page_title = DEFAULT_PAGE_TITLE.to_string();
        }
        if self.summary_title.is_empty() {
            self.summary_title = DEFAULT_SUMMARY_TITLE.to_string();
        }
        if self.pdf_href.is_empty() {
            self.pdf_href = DEFAULT_PDF_HREF.to_string();
        }
        if self.footer_name.is_empty() {
            self.footer_name = self.name.clone();
        }
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// `"year": 2021` is as common as `"year": "2021"` in hand-written profiles.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "expected text or number, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gets_defaults() {
        let profile = Profile::from_json_str("{}").unwrap();

        assert_eq!(profile.page_title, "Resume");
        assert_eq!(profile.summary_title, "Summary");
        assert_eq!(profile.pdf_href, "./resume.pdf");
        assert_eq!(profile.name, "");
        assert_eq!(profile.footer_name, "");
        assert!(profile.summary.is_empty());
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_footer_name_falls_back_to_name() {
        let profile = Profile::from_json_str(r#"{"name": "A. Engineer"}"#).unwrap();
        assert_eq!(profile.footer_name, "A. Engineer");

        let profile =
            Profile::from_json_str(r#"{"name": "A. Engineer", "footerName": "AE"}"#).unwrap();
        assert_eq!(profile.footer_name, "AE");
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let profile =
            Profile::from_json_str(r#"{"pageTitle": "", "summaryTitle": "", "pdfHref": ""}"#)
                .unwrap();
        assert_eq!(profile.page_title, "Resume");
        assert_eq!(profile.summary_title, "Summary");
        assert_eq!(profile.pdf_href, "./resume.pdf");
    }

    #[test]
    fn test_nulls_are_treated_as_absent() {
        let profile = Profile::from_json_str(
            r#"{"name": null, "skills": null, "projects": [{"name": "X", "bullets": null, "sub": null}]}"#,
        )
        .unwrap();

        assert_eq!(profile.name, "");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.projects.len(), 1);
        assert!(profile.projects[0].bullets.is_empty());
        assert_eq!(profile.projects[0].sub, "");
    }

    #[test]
    fn test_link_kind_parsing() {
        let profile = Profile::from_json_str(
            r#"{"links": [
                {"text": "Print", "type": "print", "primary": true},
                {"text": "GitHub", "href": "https://github.com/x", "type": "external"},
                {"text": "Mail", "href": "mailto:x@y.z", "type": "mailto"},
                {"text": "Plain"}
            ]}"#,
        )
        .unwrap();

        let kinds: Vec<LinkKind> = profile.links.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LinkKind::Print,
                LinkKind::External,
                LinkKind::External,
                LinkKind::External
            ]
        );
        assert!(profile.links[0].primary);
        assert!(!profile.links[3].primary);
        assert_eq!(profile.links[3].href, "");
    }

    #[test]
    fn test_numeric_years_and_periods() {
        let profile = Profile::from_json_str(
            r#"{
                "education": [{"name": "Academy", "year": 2019}],
                "seaService": [{"period": 2020, "vessel": "MV Example", "rank": "3/O"}]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.education[0].year, "2019");
        assert_eq!(profile.sea_service[0].period, "2020");
        assert!(profile.sea_service[0].bullets.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = Profile::from_json_str(r#"{"skills": "Rust"}"#).unwrap_err();
        assert!(err.is_load_error());

        let err = Profile::from_json_str("<html>").unwrap_err();
        assert!(err.is_load_error());
    }
}
