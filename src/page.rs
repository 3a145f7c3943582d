use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};

static DEFAULT_TEMPLATE: &str = include_str!("default_template.html");

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Text of the first `# ` line in the document.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}

/// An HTML page with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        fs::read_to_string(path)
            .map(Self::new)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Fill in the placeholders and point root-relative `href`/`src`
    /// attributes at `base_path`.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
            .replace("href=\"/", &format!("href=\"{base_path}"))
            .replace("src=\"/", &format!("src=\"{base_path}"))
    }
}

/// Convert a document and wrap it in `template`.
pub fn generate_page(markdown: &str, template: &Template, config: &Config) -> Result<String> {
    let content = crate::markdown_to_html_with_config(markdown, config)?;
    let title = extract_title(markdown)?;
    Ok(template.render(&title, &content, &config.page.base_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_is_first_h1() {
        assert_eq!(
            extract_title("intro\n## Not this\n# Tolkien Fan Club\n# Later").unwrap(),
            "Tolkien Fan Club"
        );
    }

    #[test]
    fn missing_title() {
        assert!(matches!(
            extract_title("## only h2\nand text"),
            Err(Error::MissingTitle)
        ));
    }

    #[test]
    fn template_substitution_and_base_path() {
        let template = Template::new(
            "<title>{{ Title }}</title><a href=\"/x\"></a><img src=\"/y.png\">{{ Content }}",
        );
        assert_eq!(
            template.render("T", "<div><p><a href=\"/z\">z</a></p></div>", "/site/"),
            "<title>T</title><a href=\"/site/x\"></a><img src=\"/site/y.png\"><div><p><a href=\"/site/z\">z</a></p></div>"
        );
    }

    #[test]
    fn default_base_path_leaves_links_alone() {
        let template = Template::new("<a href=\"/x\">{{ Content }}</a>");
        assert_eq!(template.render("", "c", "/"), "<a href=\"/x\">c</a>");
    }

    #[test]
    fn generates_full_page() {
        let page = generate_page(
            "# Hello\n\nWorld",
            &Template::default(),
            &Config::compiled_default(),
        )
        .unwrap();
        assert!(page.contains("<title>Hello</title>"));
        assert!(page.contains("<div><h1>Hello</h1><p>World</p></div>"));
        assert!(!page.contains(CONTENT_PLACEHOLDER));
    }

    #[test]
    fn load_missing_template_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Template::load(&dir.path().join("template.html")),
            Err(Error::Io { .. })
        ));
    }
}
