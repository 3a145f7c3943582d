//! Markdown to HTML conversion.
//!
//! A document is split into blank-line separated blocks, each block is
//! classified and built into a [`Node`] subtree, and the subtrees are
//! wrapped in a single root `<div>`.

mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod page;
mod parser;

pub use block::{Block, BlockType, ListKind, Style, StyleStack, TextSpan};
pub use config::{Config, LimitsConfig, PageConfig};
pub use error::{Error, Result};
pub use inline::tokenize;
pub use node::{Attributes, Node};
pub use page::{Template, extract_title, generate_page};
pub use parser::{classify, segment};

/// Segment and classify markdown text into blocks.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    parser::parse(markdown)
}

/// Build the HTML tree for markdown using default config.
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    markdown_to_node_with_config(markdown, &Config::compiled_default())
}

/// Build the HTML tree for markdown with custom config.
pub fn markdown_to_node_with_config(markdown: &str, config: &Config) -> Result<Node> {
    let markdown = markdown.replace("\r\n", "\n");
    let blocks = parse(&markdown);
    html::blocks_to_node(&blocks, config)
}

/// Convert markdown to an HTML string using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to an HTML string with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> Result<String> {
    Ok(markdown_to_node_with_config(markdown, config)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            markdown_to_html("# Title\n\nSome *text*.").unwrap(),
            "<div><h1>Title</h1><p>Some <i>text</i>.</p></div>"
        );
    }

    #[test]
    fn windows_line_endings() {
        assert_eq!(
            markdown_to_html("# Title\r\n\r\n- a\r\n- b").unwrap(),
            "<div><h1>Title</h1><ol><li style=\"list-style-type:disc\">a</li><li style=\"list-style-type:disc\">b</li></ol></div>"
        );
    }

    #[test]
    fn render_is_idempotent() {
        let node = markdown_to_node("> quote\n\n1. one\n  - sub\n\n```\ncode\n```").unwrap();
        assert_eq!(node.render(), node.render());
    }

    #[test]
    fn list_depth_limit_comes_from_config() {
        let mut config = Config::compiled_default();
        config.limits.max_list_depth = 1;
        let md = "- a\n  - b";
        assert!(matches!(
            markdown_to_html_with_config(md, &config),
            Err(Error::NestingTooDeep { limit: 1 })
        ));
        assert!(markdown_to_html(md).is_ok());
    }

    #[test]
    fn full_document() {
        let md = "# Tolkien Fan Club

**I like Tolkien**. Read my [first post here](/majesty)

> All that is gold does not glitter

## Reasons

1. The world
2. The characters
  - Frodo
  - Sam

```
fn main() {}
```";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><h1>Tolkien Fan Club</h1>\
             <p><b>I like Tolkien</b>. Read my <a href=\"/majesty\">first post here</a></p>\
             <blockquote><p>All that is gold does not glitter\n</p></blockquote>\
             <h2>Reasons</h2>\
             <ol><li style=\"list-style-type:decimal\" value=\"1\">The world</li>\
             <li style=\"list-style-type:decimal\" value=\"2\">The characters<ol>\
             <li style=\"list-style-type:circle\">Frodo</li>\
             <li style=\"list-style-type:circle\">Sam</li></ol></li></ol>\
             <pre><code>fn main() {}\n</code></pre></div>"
        );
    }
}
