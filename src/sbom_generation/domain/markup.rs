/// MarkupNode - a child of a [`MarkupElement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(MarkupElement),
    Text(String),
    /// Text written verbatim inside a CDATA section
    CData(String),
}

/// MarkupElement - an in-memory XML element tree
///
/// Formatters build the document as a tree first and serialize it in one
/// pass; the merger splices trees together before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<MarkupNode>,
}

impl MarkupElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Shorthand for `<name>text</name>`
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: MarkupElement) -> Self {
        self.children.push(MarkupNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::Text(text.into()));
        self
    }

    pub fn with_cdata(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::CData(text.into()));
        self
    }

    pub fn push_child(&mut self, child: MarkupElement) {
        self.children.push(MarkupNode::Element(child));
    }

    pub fn push_node(&mut self, node: MarkupNode) {
        self.children.push(node);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of `key`, or appends it when absent
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Vec<(String, String)> {
        &mut self.attributes
    }

    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &MarkupElement> {
        self.children.iter().filter_map(|node| match node {
            MarkupNode::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut MarkupElement> {
        self.children.iter_mut().filter_map(|node| match node {
            MarkupNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First direct child element with the given local name
    pub fn find_child(&self, local_name: &str) -> Option<&MarkupElement> {
        self.child_elements()
            .find(|element| element.local_name() == local_name)
    }

    pub fn find_child_mut(&mut self, local_name: &str) -> Option<&mut MarkupElement> {
        self.children.iter_mut().find_map(|node| match node {
            MarkupNode::Element(element) if element.local_name() == local_name => Some(element),
            _ => None,
        })
    }

    /// Removes every direct child element with the given local name and
    /// returns them in document order
    pub fn take_children(&mut self, local_name: &str) -> Vec<MarkupElement> {
        let (taken, kept): (Vec<MarkupNode>, Vec<MarkupNode>) =
            std::mem::take(&mut self.children)
                .into_iter()
                .partition(|node| {
                    matches!(node, MarkupNode::Element(element) if element.local_name() == local_name)
                });
        self.children = kept;
        taken
            .into_iter()
            .filter_map(|node| match node {
                MarkupNode::Element(element) => Some(element),
                _ => None,
            })
            .collect()
    }

    /// Removes and returns every child node
    pub fn drain_children(&mut self) -> Vec<MarkupNode> {
        std::mem::take(&mut self.children)
    }

    /// Concatenated text and CDATA content of the direct children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                MarkupNode::Text(text) | MarkupNode::CData(text) => Some(text.as_str()),
                MarkupNode::Element(_) => None,
            })
            .collect()
    }
}
