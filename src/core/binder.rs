//! Mapping rules from profile fields to page content.
//!
//! Every `mount_*` function clears its target before appending, so binding
//! the same profile twice leaves the page exactly as binding it once.

use crate::core::dom::{Child, ClickAction, Document, NodeId};
use crate::core::mounts::MountPoints;
use crate::domain::model::{
    Certificate, EducationEntry, LinkDescriptor, LinkKind, MetaPill, Profile, Project,
    SeaServiceRecord,
};
use chrono::Datelike;

pub const DEFAULT_LINK_LABEL: &str = "Link";

#[derive(Debug, Clone, Copy)]
pub struct Binder {
    year: i32,
}

impl Default for Binder {
    fn default() -> Self {
        Self::current_year()
    }
}

impl Binder {
    /// A binder that stamps `year` into the footer.
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn current_year() -> Self {
        Self::new(chrono::Local::now().year())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn bind(&self, doc: &mut Document, mounts: &MountPoints, profile: &Profile) {
        doc.set_text_content(mounts.page_title, &profile.page_title);
        doc.set_title(&profile.page_title);

        doc.set_text_content(mounts.name, &profile.name);
        doc.set_text_content(mounts.role, &profile.role);

        mount_meta(doc, mounts.meta, &profile.meta);
        mount_links(doc, mounts.cta, &profile.links);

        doc.set_text_content(mounts.summary_hint, &profile.summary_hint);
        doc.set_text_content(mounts.summary_title, &profile.summary_title);
        mount_list(doc, mounts.summary, &profile.summary);

        doc.set_text_content(mounts.sea_hint, &profile.sea_hint);
        mount_sea_service(doc, mounts.sea_service, &profile.sea_service);

        doc.set_text_content(mounts.project_hint, &profile.project_hint);
        mount_projects(doc, mounts.projects, &profile.projects);

        mount_chips(doc, mounts.skills, &profile.skills);
        mount_certificates(doc, mounts.certificates, &profile.certificates);
        mount_education(doc, mounts.education, &profile.education);

        doc.set_text_content(mounts.highlights_hint, &profile.highlights_hint);
        mount_list(doc, mounts.highlights, &profile.highlights);

        doc.set_text_content(mounts.pdf_hint, &profile.pdf_hint);
        doc.set_attribute(mounts.pdf_link, "href", &profile.pdf_href);

        doc.set_text_content(mounts.year, &self.year.to_string());
        doc.set_text_content(mounts.footer_name, &profile.footer_name);

        tracing::debug!(
            links = profile.links.len(),
            sea_service = profile.sea_service.len(),
            projects = profile.projects.len(),
            skills = profile.skills.len(),
            "Bound profile into page"
        );
    }
}

pub fn mount_list(doc: &mut Document, ul: NodeId, items: &[String]) {
    doc.clear_children(ul);
    for text in items {
        let li = doc.el("li", &[], vec![text.into()]);
        doc.append_child(ul, li);
    }
}

pub fn mount_meta(doc: &mut Document, root: NodeId, meta: &[MetaPill]) {
    doc.clear_children(root);
    for pill in meta {
        let label = doc.el("strong", &[], vec![(&pill.label).into()]);
        let value = doc.el("span", &[], vec![(&pill.value).into()]);
        let node = doc.el("div", &[("class", "pill")], vec![label.into(), value.into()]);
        doc.append_child(root, node);
    }
}

pub fn mount_links(doc: &mut Document, cta: NodeId, links: &[LinkDescriptor]) {
    doc.clear_children(cta);
    for link in links {
        let class = if link.primary { "btn primary" } else { "btn" };
        let anchor = match link.kind {
            LinkKind::Print => {
                let a = doc.el("a", &[("class", class), ("href", "#")], vec![(&link.text).into()]);
                doc.set_on_click(a, ClickAction::Print);
                a
            }
            LinkKind::External => {
                let href = if link.href.is_empty() { "#" } else { link.href.as_str() };
                doc.el(
                    "a",
                    &[
                        ("class", class),
                        ("href", href),
                        ("target", "_blank"),
                        ("rel", "noreferrer"),
                    ],
                    vec![(&link.text).into()],
                )
            }
        };
        doc.append_child(cta, anchor);
    }
}

pub fn mount_sea_service(doc: &mut Document, tbody: NodeId, rows: &[SeaServiceRecord]) {
    doc.clear_children(tbody);
    for row in rows {
        let period = doc.el("td", &[], vec![(&row.period).into()]);

        let vessel_name = doc.el("strong", &[], vec![(&row.vessel).into()]);
        let vessel_line = doc.el("div", &[], vec![vessel_name.into()]);
        let vessel_sub = doc.el("div", &[("class", "sub")], vec![(&row.vessel_sub).into()]);
        let vessel = doc.el("td", &[], vec![vessel_line.into(), vessel_sub.into()]);

        let rank = doc.el("td", &[], vec![(&row.rank).into()]);

        let bullets = bullet_list(doc, &row.bullets, &[("style", "margin:0; padding-left:18px;")]);
        let duties = doc.el("td", &[], vec![bullets.into()]);

        let tr = doc.el(
            "tr",
            &[],
            vec![period.into(), vessel.into(), rank.into(), duties.into()],
        );
        doc.append_child(tbody, tr);
    }
}

pub fn mount_projects(doc: &mut Document, root: NodeId, projects: &[Project]) {
    doc.clear_children(root);
    for project in projects {
        let item = record_item(doc, &project.name, &project.sub, &project.year, &project.bullets);

        if !project.href.is_empty() {
            let label = if project.link_text.is_empty() {
                DEFAULT_LINK_LABEL
            } else {
                project.link_text.as_str()
            };
            let text = if project.href_text.is_empty() {
                project.href.as_str()
            } else {
                project.href_text.as_str()
            };
            let anchor = doc.el(
                "a",
                &[
                    ("href", project.href.as_str()),
                    ("target", "_blank"),
                    ("rel", "noreferrer"),
                ],
                vec![text.into()],
            );
            let hint = doc.el(
                "div",
                &[("class", "hint")],
                vec![format!("{}: ", label).into(), anchor.into()],
            );
            doc.append_child(item, hint);
        }

        doc.append_child(root, item);
    }
}

pub fn mount_chips(doc: &mut Document, root: NodeId, items: &[String]) {
    doc.clear_children(root);
    for text in items {
        let chip = doc.el("span", &[("class", "chip")], vec![text.into()]);
        doc.append_child(root, chip);
    }
}

pub fn mount_certificates(doc: &mut Document, root: NodeId, rows: &[Certificate]) {
    doc.clear_children(root);
    for row in rows {
        let k = doc.el("div", &[("class", "k")], vec![(&row.k).into()]);
        let v = doc.el("div", &[("class", "v")], vec![(&row.v).into()]);
        let kv = doc.el("div", &[("class", "kv")], vec![k.into(), v.into()]);
        doc.append_child(root, kv);
    }
}

pub fn mount_education(doc: &mut Document, root: NodeId, rows: &[EducationEntry]) {
    doc.clear_children(root);
    for entry in rows {
        let item = record_item(doc, &entry.name, &entry.sub, &entry.year, &entry.bullets);
        doc.append_child(root, item);
    }
}

/// `<div class="item">` with the name/sub/when heading and a bullet list.
fn record_item(doc: &mut Document, name: &str, sub: &str, when: &str, bullets: &[String]) -> NodeId {
    let name = doc.el("div", &[("class", "name")], vec![name.into()]);
    let sub = doc.el("div", &[("class", "sub")], vec![sub.into()]);
    let title = doc.el("div", &[], vec![name.into(), sub.into()]);
    let when = doc.el("div", &[("class", "when")], vec![when.into()]);
    let top = doc.el("div", &[("class", "top")], vec![title.into(), when.into()]);
    let list = bullet_list(doc, bullets, &[]);
    doc.el("div", &[("class", "item")], vec![top.into(), list.into()])
}

fn bullet_list(doc: &mut Document, bullets: &[String], attrs: &[(&str, &str)]) -> NodeId {
    let items: Vec<Child> = bullets
        .iter()
        .map(|b| Child::from(doc.el("li", &[], vec![b.into()])))
        .collect();
    doc.el("ul", attrs, items)
}
