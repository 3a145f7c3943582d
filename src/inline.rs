use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::block::{Style, TextSpan};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link regex"));

/// Delimiters in the order they are split. `**` has to go before `*`.
const DELIMITERS: [(&str, Style); 5] = [
    ("**", Style::Bold),
    ("~~", Style::Strikethrough),
    ("*", Style::Italic),
    ("_", Style::Italic),
    ("`", Style::Code),
];

/// Split a run of inline markdown into styled spans.
///
/// Delimited styles are applied first, then images, then links. Empty
/// fragments are dropped, so an unmatched delimiter loses the text that
/// follows it.
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, style) in &DELIMITERS {
        spans = split_delimiter(spans, delimiter, style);
    }
    spans = split_markup(spans, &IMAGE_RE, false, Style::Image);
    split_markup(spans, &LINK_RE, true, Style::Link)
}

/// Even pieces are outside the delimiter, odd pieces inside.
fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, style: &Style) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            warn!(
                "unterminated `{}` in {:?}; trailing text is treated as styled",
                delimiter, span.text
            );
        }
        for (index, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let styles = if index % 2 == 1 {
                span.styles.with(style.clone())
            } else {
                span.styles.clone()
            };
            out.push(TextSpan::styled(piece, styles));
        }
    }
    out
}

/// Pull `[text](url)`-shaped markup out of each span. With `skip_bang`, a
/// match directly preceded by `!` is left as text.
fn split_markup(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    skip_bang: bool,
    make_style: fn(String) -> Style,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = span.text.as_str();
        let mut search_from = 0;
        let mut emitted_to = 0;
        while let Some(caps) = pattern.captures_at(text, search_from) {
            let Some(whole) = caps.get(0) else { break };
            if skip_bang && text[..whole.start()].ends_with('!') {
                // `[` is one byte, so this stays on a char boundary
                search_from = whole.start() + 1;
                continue;
            }
            let before = &text[emitted_to..whole.start()];
            if !before.is_empty() {
                out.push(TextSpan::styled(before, span.styles.clone()));
            }
            let label = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str());
            out.push(TextSpan::styled(
                label,
                span.styles.with(make_style(url.to_string())),
            ));
            emitted_to = whole.end();
            search_from = whole.end();
        }
        let rest = &text[emitted_to..];
        if !rest.is_empty() {
            out.push(TextSpan::styled(rest, span.styles.clone()));
        }
    }
    out
}
