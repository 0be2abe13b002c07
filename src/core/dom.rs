//! A small arena-backed DOM that stands in for the browser page.
//!
//! Nodes are never freed: clearing an element detaches its children, which
//! stay in the arena but are unreachable from the document root. A document
//! lives for a single render, so this is fine.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Behaviour attached to an element's click, in place of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Suppress the default navigation and open the print dialog.
    Print,
}

impl ClickAction {
    fn script(&self) -> &'static str {
        match self {
            ClickAction::Print => "event.preventDefault(); window.print();",
        }
    }

    pub fn prevents_default(&self) -> bool {
        match self {
            ClickAction::Print => true,
        }
    }
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attrs: Vec<(String, String)>,
    on_click: Option<ClickAction>,
}

#[derive(Debug, Clone)]
enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A child passed to [`Document::el`]: either literal text or an existing node.
#[derive(Debug, Clone)]
pub enum Child {
    Text(String),
    Node(NodeId),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&String> for Child {
    fn from(text: &String) -> Self {
        Child::Text(text.clone())
    }
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}

const VOID_ELEMENTS: &[&str] = &["area", "base", "br", "col", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    html: NodeId,
    head: NodeId,
    title: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty `<html><head><title></title></head><body></body></html>`.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            html: NodeId(0),
            head: NodeId(0),
            title: NodeId(0),
            body: NodeId(0),
        };
        doc.html = doc.create_element("html");
        doc.head = doc.create_element("head");
        doc.title = doc.create_element("title");
        doc.body = doc.create_element("body");
        doc.append_child(doc.html, doc.head);
        doc.append_child(doc.head, doc.title);
        doc.append_child(doc.html, doc.body);
        doc
    }

    pub fn html(&self) -> NodeId {
        self.html
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn title(&self) -> String {
        self.text_content(self.title)
    }

    pub fn set_title(&mut self, title: &str) {
        self.set_text_content(self.title, title);
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            on_click: None,
        }))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Build an element with attributes and children in one call.
    pub fn el(&mut self, tag: &str, attrs: &[(&str, &str)], children: Vec<Child>) -> NodeId {
        let node = self.create_element(tag);
        for (name, value) in attrs {
            self.set_attribute(node, name, value);
        }
        for child in children {
            let child = match child {
                Child::Text(text) => self.create_text(&text),
                Child::Node(id) => id,
            };
            self.append_child(node, child);
        }
        node
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Remove `id` from its parent, if it has one.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
    }

    pub fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.nodes[id.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Same as assigning `textContent`: all children are replaced by one text node.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        if let NodeData::Text(existing) = &mut self.nodes[id.0].data {
            *existing = text.to_string();
            return;
        }
        self.clear_children(id);
        if !text.is_empty() {
            let node = self.create_text(text);
            self.append_child(id, node);
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeData::Element(element) = &mut self.nodes[id.0].data {
            match element.attrs.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => *v = value.to_string(),
                None => element.attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element(element) => element
                .attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get_attribute(id, "class")
            .map(|value| value.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn set_on_click(&mut self, id: NodeId, action: ClickAction) {
        if let NodeData::Element(element) = &mut self.nodes[id.0].data {
            element.on_click = Some(action);
        }
    }

    pub fn on_click(&self, id: NodeId) -> Option<ClickAction> {
        match &self.nodes[id.0].data {
            NodeData::Element(element) => element.on_click,
            NodeData::Text(_) => None,
        }
    }

    /// `None` for text nodes.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element(element) => Some(element.tag.as_str()),
            NodeData::Text(_) => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(|c| matches!(self.nodes[c.0].data, NodeData::Element(_)))
            .collect()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Depth-first search from the root; detached nodes are never found.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        let mut stack = vec![self.html];
        while let Some(id) = stack.pop() {
            if self.get_attribute(id, "id") == Some(element_id) {
                return Some(id);
            }
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        None
    }

    /// Throw away everything in `<body>` and put `content` there instead.
    pub fn replace_body(&mut self, content: NodeId) {
        self.clear_children(self.body);
        self.append_child(self.body, content);
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!doctype html>\n");
        self.write_node(self.html, &mut out);
        out.push('\n');
        out
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in &self.nodes[id.0].children {
            self.write_node(*child, &mut out);
        }
        out
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(_) => {
                for child in &self.nodes[id.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        match &node.data {
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Element(element) => {
                let _ = write!(out, "<{}", element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                if let Some(action) = element.on_click {
                    let _ = write!(out, " onclick=\"{}\"", escape_attr(action.script()));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    return;
                }
                for child in &node.children {
                    self.write_node(*child, out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
