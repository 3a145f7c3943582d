use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::block::{Block, BlockType, ListKind};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) ").expect("valid heading regex"));
pub(crate) static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*] ").expect("valid unordered item regex"));
pub(crate) static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z0-9]+)[.)] ").expect("valid ordered item regex"));

const FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks on blank lines.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Decide the structural type of a single block. First match wins:
/// code, heading, quote, list, then paragraph.
pub fn classify(block: &str) -> BlockType {
    if is_code(block) {
        return BlockType::Code;
    }
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if is_quote(block) {
        return BlockType::Quote;
    }
    if let Some(kind) = list_kind(block) {
        return BlockType::List(kind);
    }
    BlockType::Paragraph
}

/// Segment and classify a document.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    segment(markdown)
        .into_iter()
        .map(|text| {
            let kind = classify(text);
            debug!("classified {} block: {:?}", kind.name(), text);
            Block { kind, text }
        })
        .collect()
}

fn is_code(block: &str) -> bool {
    block.chars().count() >= 6 && block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn heading_level(block: &str) -> Option<u8> {
    if block.contains('\n') {
        return None;
    }
    HEADING_RE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|hashes| hashes.as_str().len() as u8)
}

fn is_quote(block: &str) -> bool {
    block.starts_with('>') && block.lines().all(|line| line.trim_start().starts_with('>'))
}

fn list_kind(block: &str) -> Option<ListKind> {
    let mut unordered = false;
    let mut ordered = false;
    for line in block.lines() {
        if UNORDERED_ITEM_RE.is_match(line) {
            unordered = true;
        } else if ORDERED_ITEM_RE.is_match(line) {
            ordered = true;
        } else {
            return None;
        }
    }
    match (unordered, ordered) {
        (true, false) => Some(ListKind::Unordered),
        (false, true) => Some(ListKind::Ordered),
        (true, true) => Some(ListKind::Mixed),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn segments_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
    ";
        assert_eq!(
            segment(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn extra_blank_lines_are_dropped() {
        assert_eq!(segment("a\n\n\n\n\nb\n\n\n"), vec!["a", "b"]);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n  \n\n").is_empty());
    }

    #[rstest]
    #[case("# Heading!", BlockType::Heading(1))]
    #[case("## Heading 2", BlockType::Heading(2))]
    #[case("###### Six", BlockType::Heading(6))]
    #[case("####### Seven", BlockType::Paragraph)]
    #[case("#NoSpace", BlockType::Paragraph)]
    #[case("# Two\nlines", BlockType::Paragraph)]
    #[case("```Code 1```", BlockType::Code)]
    #[case("```\n    Code 2\n    ```", BlockType::Code)]
    #[case("``````", BlockType::Code)]
    #[case("`````", BlockType::Paragraph)]
    #[case("```\n# not a heading\n- nor a list\n```", BlockType::Code)]
    #[case("> Quote\n> Version\n> 1", BlockType::Quote)]
    #[case(">No space\n  > indented", BlockType::Quote)]
    #[case("> Quote\nthen not", BlockType::Paragraph)]
    #[case("- Unordered\n- List\n- With\n- Dashes", BlockType::List(ListKind::Unordered))]
    #[case("* Unordered\n* List\n* With\n* Stars", BlockType::List(ListKind::Unordered))]
    #[case("1. Ordered\n2. List\n3. With\n4. Dots", BlockType::List(ListKind::Ordered))]
    #[case("1) Ordered\n2) List\n3) With\n4) Parens", BlockType::List(ListKind::Ordered))]
    #[case("a. alpha\nb. beta", BlockType::List(ListKind::Ordered))]
    #[case("- outer\n  1. inner\n  2. inner", BlockType::List(ListKind::Mixed))]
    #[case("- item\nnot an item", BlockType::Paragraph)]
    #[case("-not an item", BlockType::Paragraph)]
    #[case("And others", BlockType::Paragraph)]
    fn classifies(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn long_ordered_list() {
        let block = (1..=11)
            .map(|n| format!("{n}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockType::List(ListKind::Ordered));
    }

    #[test]
    fn parse_tags_each_block() {
        let blocks = parse("# Title\n\nSome *text*.\n\n- a\n- b");
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockType::Heading(1),
                BlockType::Paragraph,
                BlockType::List(ListKind::Unordered),
            ]
        );
        assert_eq!(blocks[1].text, "Some *text*.");
    }
}
