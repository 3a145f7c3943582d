use log::{trace, warn};

use crate::block::{Block, BlockType, Style, TextSpan};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::inline::tokenize;
use crate::node::{Attributes, Node};
use crate::parser::{ORDERED_ITEM_RE, UNORDERED_ITEM_RE};

/// Build the root `<div>` holding one subtree per block.
pub fn blocks_to_node(blocks: &[Block<'_>], config: &Config) -> Result<Node> {
    let children = blocks
        .iter()
        .map(|block| block_to_node(block, config))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("div", children))
}

fn block_to_node(block: &Block<'_>, config: &Config) -> Result<Node> {
    match block.kind {
        BlockType::Paragraph => Ok(paragraph(block.text)),
        BlockType::Heading(level) => heading(block.text, level),
        BlockType::Code => code(block.text),
        BlockType::Quote => quote(block.text),
        BlockType::List(_) => {
            let lines: Vec<&str> = block.text.lines().collect();
            list(&lines, 0, config.limits.max_list_depth)
        }
    }
}

fn paragraph(text: &str) -> Node {
    Node::parent("p", spans_to_nodes(&tokenize(&text.replace('\n', " "))))
}

fn heading(text: &str, level: u8) -> Result<Node> {
    let content = text
        .strip_prefix(&"#".repeat(level as usize))
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| Error::malformed("heading", text))?;
    Ok(Node::parent(
        format!("h{level}"),
        spans_to_nodes(&tokenize(content)),
    ))
}

/// Fenced code is emitted raw. On a multi-line block the text after the
/// opening fence is the info string, whose first word names the language.
fn code(text: &str) -> Result<Node> {
    let inner = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .ok_or_else(|| Error::malformed("code", text))?;

    let (language, body) = match inner.split_once('\n') {
        Some((info, body)) => (info.split_whitespace().next(), body),
        None => (None, inner),
    };

    let attrs = match language {
        Some(lang) => Attributes::new().with("class", format!("language-{lang}")),
        None => Attributes::new(),
    };
    Ok(Node::parent("pre", vec![Node::leaf_with("code", body, attrs)]))
}

/// Every quoted line becomes its own paragraph, newline included.
fn quote(text: &str) -> Result<Node> {
    let paragraphs = text
        .lines()
        .map(|line| {
            let line = line
                .trim_start()
                .strip_prefix('>')
                .ok_or_else(|| Error::malformed("quote", text))?;
            let line = line.strip_prefix(' ').unwrap_or(line);
            Ok(Node::parent("p", spans_to_nodes(&tokenize(&format!("{line}\n")))))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("blockquote", paragraphs))
}

/// Marker style of an ordered item, picked from the first label character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbering {
    LowerAlpha,
    UpperAlpha,
    Decimal,
}

impl Numbering {
    fn from_label(label: &str) -> Self {
        match label.chars().next() {
            Some(c) if c.is_ascii_lowercase() => Numbering::LowerAlpha,
            Some(c) if c.is_ascii_uppercase() => Numbering::UpperAlpha,
            _ => Numbering::Decimal,
        }
    }

    fn css(self) -> &'static str {
        match self {
            Numbering::LowerAlpha => "lower-alpha",
            Numbering::UpperAlpha => "upper-alpha",
            Numbering::Decimal => "decimal",
        }
    }

    /// Ordinal of `label`: bijective base-26 for letters (a=1, z=26, aa=27),
    /// base-10 for digits. `None` if the label mixes kinds or overflows.
    fn value(self, label: &str) -> Option<u64> {
        match self {
            Numbering::Decimal => label.parse().ok(),
            Numbering::LowerAlpha | Numbering::UpperAlpha => {
                label.chars().try_fold(0u64, |acc, c| {
                    if !c.is_ascii_alphabetic() {
                        return None;
                    }
                    let digit = u64::from(c.to_ascii_lowercase() as u8 - b'a' + 1);
                    acc.checked_mul(26)?.checked_add(digit)
                })
            }
        }
    }
}

enum Marker<'a> {
    Bullet,
    Ordered(&'a str),
}

fn split_marker(line: &str) -> Option<(Marker<'_>, &str)> {
    if let Some(m) = UNORDERED_ITEM_RE.find(line) {
        return Some((Marker::Bullet, &line[m.end()..]));
    }
    let caps = ORDERED_ITEM_RE.captures(line)?;
    let label = caps.get(1)?.as_str();
    let whole = caps.get(0)?;
    Some((Marker::Ordered(label), &line[whole.end()..]))
}

fn bullet_style(depth: usize) -> &'static str {
    match depth {
        0 => "disc",
        1 => "circle",
        _ => "square",
    }
}

fn item_attributes(marker: &Marker<'_>, depth: usize) -> Attributes {
    match marker {
        Marker::Bullet => {
            Attributes::new().with("style", format!("list-style-type:{}", bullet_style(depth)))
        }
        Marker::Ordered(label) => {
            let numbering = Numbering::from_label(label);
            let attrs =
                Attributes::new().with("style", format!("list-style-type:{}", numbering.css()));
            match numbering.value(label) {
                Some(value) => attrs.with("value", value.to_string()),
                None => {
                    warn!("list label {label:?} has no {} value", numbering.css());
                    attrs
                }
            }
        }
    }
}

enum Entry {
    Item {
        children: Vec<Node>,
        attrs: Attributes,
    },
    /// A sub-list with no item before it to hang from.
    Orphan(Node),
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn strip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

fn is_indented(line: &str) -> bool {
    line.starts_with(char::is_whitespace)
}

/// Build one list level. Indented runs of lines recurse one level deeper
/// and hang off the item above them.
fn list(lines: &[&str], depth: usize, max_depth: usize) -> Result<Node> {
    if depth >= max_depth {
        return Err(Error::NestingTooDeep { limit: max_depth });
    }

    let indent = lines
        .iter()
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);
    let lines: Vec<&str> = lines.iter().map(|line| strip_chars(line, indent)).collect();
    trace!("list level {depth}: {} lines, indent {indent}", lines.len());

    let mut entries: Vec<Entry> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_indented(line) {
            let end = lines[i..]
                .iter()
                .position(|line| !is_indented(line))
                .map_or(lines.len(), |offset| i + offset);
            let sub_list = list(&lines[i..end], depth + 1, max_depth)?;
            match entries.last_mut() {
                Some(Entry::Item { children, .. }) => children.push(sub_list),
                _ => entries.push(Entry::Orphan(sub_list)),
            }
            i = end;
            continue;
        }

        let (marker, content) =
            split_marker(line).ok_or_else(|| Error::malformed("list", &lines.join("\n")))?;
        entries.push(Entry::Item {
            children: spans_to_nodes(&tokenize(content)),
            attrs: item_attributes(&marker, depth),
        });
        i += 1;
    }

    let children = entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Item { children, attrs } => Node::parent_with("li", children, attrs),
            Entry::Orphan(node) => node,
        })
        .collect();
    // Ordered and unordered alike render as <ol>; only list-style-type differs.
    Ok(Node::parent("ol", children))
}

fn spans_to_nodes(spans: &[TextSpan]) -> Vec<Node> {
    spans.iter().map(span_to_node).collect()
}

/// Wrap the span text in one element per style, innermost first. An image
/// replaces whatever it wraps with an `<img>` using the span text as alt.
fn span_to_node(span: &TextSpan) -> Node {
    span.styles
        .iter()
        .rev()
        .fold(Node::text(&span.text), |inner, style| match style {
            Style::Image(url) => Node::leaf_with(
                style.tag(),
                "",
                Attributes::new()
                    .with("src", url.as_str())
                    .with("alt", span.text.as_str()),
            ),
            Style::Link(url) => Node::parent_with(
                style.tag(),
                vec![inner],
                Attributes::new().with("href", url.as_str()),
            ),
            _ => Node::parent(style.tag(), vec![inner]),
        })
}
