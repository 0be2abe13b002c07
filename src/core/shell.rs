//! The static host page. It carries every mount point but no profile content.

use crate::core::dom::{Child, Document, NodeId};
use crate::core::mounts::ids;
use crate::domain::model::DEFAULT_PDF_HREF;

pub const DEFAULT_STYLESHEET: &str = "assets/style.css";

#[derive(Debug, Clone)]
pub struct PageShell {
    stylesheet: String,
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new(DEFAULT_STYLESHEET)
    }
}

impl PageShell {
    pub fn new(stylesheet: impl Into<String>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
        }
    }

    pub fn build(&self) -> Document {
        let mut doc = Document::new();
        doc.set_attribute(doc.html(), "lang", "en");

        let charset = doc.el("meta", &[("charset", "utf-8")], vec![]);
        let viewport = doc.el(
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
            vec![],
        );
        let stylesheet = doc.el(
            "link",
            &[("rel", "stylesheet"), ("href", self.stylesheet.as_str())],
            vec![],
        );
        for node in [charset, viewport, stylesheet] {
            doc.append_child(doc.head(), node);
        }

        let header = self.hero(&mut doc);
        let main = self.sections(&mut doc);
        let footer = self.footer(&mut doc);
        let wrap = doc.el(
            "div",
            &[("class", "wrap")],
            vec![header.into(), main.into(), footer.into()],
        );
        doc.append_child(doc.body(), wrap);
        doc
    }

    fn hero(&self, doc: &mut Document) -> NodeId {
        let eyebrow = doc.el("div", &[("class", "eyebrow"), ("id", ids::PAGE_TITLE)], vec![]);
        let name = doc.el("h1", &[("id", ids::NAME)], vec![]);
        let role = doc.el("div", &[("class", "role"), ("id", ids::ROLE)], vec![]);
        let meta = doc.el("div", &[("class", "meta"), ("id", ids::META)], vec![]);
        let cta = doc.el("div", &[("class", "cta"), ("id", ids::CTA)], vec![]);
        doc.el(
            "header",
            &[("class", "hero")],
            vec![
                eyebrow.into(),
                name.into(),
                role.into(),
                meta.into(),
                cta.into(),
            ],
        )
    }

    fn sections(&self, doc: &mut Document) -> NodeId {
        let summary_title = doc.el("h2", &[("id", ids::SUMMARY_TITLE)], vec![]);
        let summary_list = doc.el("ul", &[("id", ids::SUMMARY)], vec![]);
        let summary = card(doc, summary_title.into(), Some(ids::SUMMARY_HINT), summary_list);

        let head_row = table_head_row(doc, &["Period", "Vessel", "Rank", "Duties"]);
        let thead = doc.el("thead", &[], vec![head_row.into()]);
        let tbody = doc.el("tbody", &[("id", ids::SEA_SERVICE)], vec![]);
        let table = doc.el("table", &[("class", "table")], vec![thead.into(), tbody.into()]);
        let sea = card(doc, "Sea Service".into(), Some(ids::SEA_HINT), table);

        let projects_root = doc.el("div", &[("class", "items"), ("id", ids::PROJECTS)], vec![]);
        let projects = card(doc, "Projects".into(), Some(ids::PROJECT_HINT), projects_root);

        let chips = doc.el("div", &[("class", "chips"), ("id", ids::SKILLS)], vec![]);
        let skills = card(doc, "Skills".into(), None, chips);

        let kvs = doc.el("div", &[("class", "kvs"), ("id", ids::CERTIFICATES)], vec![]);
        let certificates = card(doc, "Certificates".into(), None, kvs);

        let education_root = doc.el("div", &[("class", "items"), ("id", ids::EDUCATION)], vec![]);
        let education = card(doc, "Education".into(), None, education_root);

        let highlights_list = doc.el("ul", &[("id", ids::HIGHLIGHTS)], vec![]);
        let highlights = card(
            doc,
            "Highlights".into(),
            Some(ids::HIGHLIGHTS_HINT),
            highlights_list,
        );

        let pdf_link = doc.el(
            "a",
            &[
                ("class", "btn"),
                ("id", ids::PDF_LINK),
                ("href", DEFAULT_PDF_HREF),
                ("target", "_blank"),
                ("rel", "noreferrer"),
            ],
            vec!["Download PDF".into()],
        );
        let pdf = card(doc, "Resume PDF".into(), Some(ids::PDF_HINT), pdf_link);

        doc.el(
            "main",
            &[],
            vec![
                summary.into(),
                sea.into(),
                projects.into(),
                skills.into(),
                certificates.into(),
                education.into(),
                highlights.into(),
                pdf.into(),
            ],
        )
    }

    fn footer(&self, doc: &mut Document) -> NodeId {
        let year = doc.el("span", &[("id", ids::YEAR)], vec![]);
        let name = doc.el("span", &[("id", ids::FOOTER_NAME)], vec![]);
        doc.el(
            "footer",
            &[("class", "footer")],
            vec!["© ".into(), year.into(), " ".into(), name.into()],
        )
    }
}

/// `<section class="card">` with a heading row, an optional hint slot and a body.
fn card(doc: &mut Document, heading: Child, hint_id: Option<&str>, body: NodeId) -> NodeId {
    let heading = match heading {
        Child::Node(node) => node,
        text => doc.el("h2", &[], vec![text]),
    };
    let mut head_children = vec![Child::from(heading)];
    if let Some(hint_id) = hint_id {
        let hint = doc.el("div", &[("class", "hint"), ("id", hint_id)], vec![]);
        head_children.push(hint.into());
    }
    let head = doc.el("div", &[("class", "head")], head_children);
    doc.el("section", &[("class", "card")], vec![head.into(), body.into()])
}

fn table_head_row(doc: &mut Document, labels: &[&str]) -> NodeId {
    let cells = labels
        .iter()
        .map(|label| Child::from(doc.el("th", &[], vec![(*label).into()])))
        .collect();
    doc.el("tr", &[], cells)
}
