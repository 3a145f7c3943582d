use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mdhtml::{Config, Template};

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,

    /// Prefix for root-relative links (overrides the config file)
    #[arg(long)]
    base_path: Option<String>,

    /// Write only the converted HTML, without a page template
    #[arg(long)]
    fragment: bool,

    /// Log each block as it is converted
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = Config::load(&cli.config)?;
    if let Some(base_path) = cli.base_path.clone() {
        config.page.base_path = base_path;
    }

    let markdown = fs::read_to_string(&cli.input)
        .with_context(|| format!("Error reading {}", cli.input.display()))?;

    let converted = if cli.fragment {
        mdhtml::markdown_to_html_with_config(&markdown, &config)
    } else {
        let template = load_template(cli.template.as_deref().or(config.page.template.as_deref()))?;
        mdhtml::generate_page(&markdown, &template, &config)
    };
    let html = converted.with_context(|| format!("Error converting {}", cli.input.display()))?;

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Error creating {}", parent.display()))?;
    }
    fs::write(&output, html).with_context(|| format!("Error writing {}", output.display()))?;

    info!("converted {} to {}", cli.input.display(), output.display());
    println!("Created {}", output.display());
    Ok(())
}

fn load_template(path: Option<&Path>) -> Result<Template> {
    match path {
        Some(path) => Ok(Template::load(path)?),
        None => Ok(Template::default()),
    }
}
