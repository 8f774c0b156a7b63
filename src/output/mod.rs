//! Rendering of results and catalog listings.
//!
//! Every renderer produces a `String`; [`write_output`] sends it to stdout or
//! to a file, which is how results are exported.

pub mod json;
pub mod markdown;
pub mod questions;
pub mod terminal;

use crate::assessment::AssessmentResult;
use crate::formatting::FormattingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use json::{render_json, JsonReport};
pub use markdown::render_markdown;
pub use questions::{render_questions, render_questions_json};
pub use terminal::render_terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn render_result(
    result: &AssessmentResult,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(render_terminal(result, formatting)),
        OutputFormat::Markdown => Ok(render_markdown(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Print `content`, or write it to `output_file`, creating parent directories.
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compute_result;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("nested").join("report.md");

        let result = compute_result(&[]);
        let content = render_result(&result, OutputFormat::Markdown, FormattingConfig::plain())
            .unwrap();
        write_output(&content, Some(&nested_path)).unwrap();

        let written = fs::read_to_string(&nested_path).unwrap();
        assert_eq!(written, content);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::parse("html"), None);
    }
}
