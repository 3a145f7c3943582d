/// Inline style markers. Links and images carry their target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Link(String),
    Image(String),
}

impl Style {
    /// The HTML tag a span wrapped in this style renders as.
    pub fn tag(&self) -> &'static str {
        match self {
            Style::Bold => "b",
            Style::Italic => "i",
            Style::Strikethrough => "s",
            Style::Code => "code",
            Style::Link(_) => "a",
            Style::Image(_) => "img",
        }
    }
}

/// Nested styles applied to a span, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleStack(Vec<Style>);

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this stack with `style` nested innermost.
    pub fn with(&self, style: Style) -> Self {
        let mut styles = self.0.clone();
        styles.push(style);
        Self(styles)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Styles from outermost to innermost.
    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.0.iter()
    }
}

impl From<Vec<Style>> for StyleStack {
    fn from(styles: Vec<Style>) -> Self {
        Self(styles)
    }
}

/// A run of inline text sharing one style stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub styles: StyleStack,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, StyleStack::new())
    }

    pub fn styled(text: impl Into<String>, styles: impl Into<StyleStack>) -> Self {
        Self {
            text: text.into(),
            styles: styles.into(),
        }
    }

    /// URL of the innermost link or image style, if any.
    pub fn url(&self) -> Option<&str> {
        self.styles.iter().rev().find_map(|style| match style {
            Style::Link(url) | Style::Image(url) => Some(url.as_str()),
            _ => None,
        })
    }
}

/// Which list markers a list block uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
    Mixed,
}

/// Structural type of a block, decided by [`crate::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    List(ListKind),
}

impl BlockType {
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading(_) => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::List(_) => "list",
        }
    }
}

/// A blank-line delimited chunk of the source with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockType,
    pub text: &'a str,
}
