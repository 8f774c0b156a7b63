use crate::config::{load_config, load_config_from, CciConfig};
use crate::formatting::FormattingConfig;
use crate::output::{render_result, write_output, OutputFormat};
use crate::responses::load_responses;
use crate::scoring::compute_result_with;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub responses: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

fn resolve_config(path: Option<&PathBuf>) -> Result<CciConfig> {
    match path {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

fn resolve_format(requested: Option<OutputFormat>, config: &CciConfig) -> OutputFormat {
    if let Some(format) = requested {
        return format;
    }
    match config.output.default_format.as_deref() {
        Some(name) => OutputFormat::parse(name).unwrap_or_else(|| {
            warn!(format = name, "Unknown default_format in config, using terminal");
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

fn resolve_formatting(score: &ScoreConfig, config: &CciConfig) -> FormattingConfig {
    // Files never get escape codes
    if score.plain || config.output.plain || score.output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

pub fn handle_score(score: ScoreConfig) -> Result<()> {
    let config = resolve_config(score.config.as_ref())?;
    let responses = load_responses(&score.responses)
        .with_context(|| format!("Failed to load responses from {}", score.responses.display()))?;
    info!(
        responses = responses.len(),
        path = %score.responses.display(),
        "Scoring responses"
    );

    let result = compute_result_with(&responses, &config.scoring);

    let format = resolve_format(score.format, &config);
    let formatting = resolve_formatting(&score, &config);
    let rendered = render_result(&result, format, formatting)?;
    write_output(&rendered, score.output.as_deref())?;

    if let Some(path) = &score.output {
        info!(path = %path.display(), "Wrote report");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    #[test]
    fn test_cli_format_overrides_config() {
        let config = CciConfig {
            output: OutputConfig {
                default_format: Some("markdown".into()),
                plain: false,
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, &config), OutputFormat::Markdown);
    }

    #[test]
    fn test_unknown_config_format_falls_back_to_terminal() {
        let config = CciConfig {
            output: OutputConfig {
                default_format: Some("html".into()),
                plain: false,
            },
            ..Default::default()
        };
        assert_eq!(resolve_format(None, &config), OutputFormat::Terminal);
    }

    #[test]
    fn test_file_output_is_always_plain() {
        let score = ScoreConfig {
            responses: PathBuf::from("r.json"),
            format: None,
            output: Some(PathBuf::from("report.txt")),
            config: None,
            plain: false,
        };
        assert_eq!(
            resolve_formatting(&score, &CciConfig::default()),
            FormattingConfig::plain()
        );
    }
}
