/// Ordered `name="value"` pairs on an element. Names are unique; setting an
/// existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn render_into(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

/// A renderable HTML tree node.
///
/// A `Leaf` holds text and never has children; a `Parent` always has a tag
/// and holds its content in `children`. Text is emitted verbatim, without
/// HTML escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },
    Parent {
        tag: String,
        children: Vec<Node>,
        attrs: Attributes,
    },
}

impl Node {
    /// Untagged text, rendered as-is.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf_with(tag, value, Attributes::new())
    }

    pub fn leaf_with(tag: impl Into<String>, value: impl Into<String>, attrs: Attributes) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::parent_with(tag, children, Attributes::new())
    }

    pub fn parent_with(tag: impl Into<String>, children: Vec<Node>, attrs: Attributes) -> Self {
        Node::Parent {
            tag: tag.into(),
            children,
            attrs,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            Node::Leaf { attrs, .. } | Node::Parent { attrs, .. } => attrs,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Parent { children, .. } => children,
        }
    }

    /// Serialize this node and its descendants to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            Node::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                open_tag(tag, attrs, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            Node::Parent {
                tag,
                children,
                attrs,
            } => {
                open_tag(tag, attrs, out);
                for child in children {
                    child.render_into(out);
                }
                close_tag(tag, out);
            }
        }
    }
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attrs.render_into(out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
