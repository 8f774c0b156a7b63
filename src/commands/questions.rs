use crate::catalog::{self, Category, Question};
use crate::output::{render_questions, render_questions_json, write_output, OutputFormat};
use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct QuestionsConfig {
    pub category: Option<String>,
    pub format: OutputFormat,
}

fn select_questions(category: Option<&str>) -> Result<Vec<&'static Question>> {
    match category {
        Some(name) => {
            let category = Category::parse(name).ok_or_else(|| {
                anyhow!(
                    "Unknown category '{}'. Expected one of: communication, collaboration, contextual, coach",
                    name
                )
            })?;
            Ok(catalog::by_category(category).collect())
        }
        None => Ok(catalog::all().iter().collect()),
    }
}

pub fn list_questions(config: QuestionsConfig) -> Result<()> {
    let questions = select_questions(config.category.as_deref())?;
    let rendered = match config.format {
        OutputFormat::Json => render_questions_json(&questions)?,
        OutputFormat::Terminal | OutputFormat::Markdown => render_questions(&questions),
    };
    write_output(&rendered, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_category() {
        let coach = select_questions(Some("coach")).unwrap();
        assert_eq!(coach.len(), 5);
        assert!(coach.iter().all(|q| q.is_coach()));
    }

    #[test]
    fn test_select_unknown_category_fails() {
        assert!(select_questions(Some("leadership")).is_err());
    }

    #[test]
    fn test_select_all() {
        assert_eq!(select_questions(None).unwrap().len(), catalog::all().len());
    }
}
