use crate::catalog::{Question, ResponseType};
use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

fn answer_hint(question: &Question) -> String {
    match question.response_type {
        ResponseType::Scenario => question
            .options
            .iter()
            .map(|o| o.id)
            .collect::<Vec<_>>()
            .join("/"),
        ResponseType::Likert => format!("1-{}", question.effective_scale()),
        ResponseType::Slider | ResponseType::Agreement => {
            format!("0-{}", question.effective_scale())
        }
    }
}

/// Tabular listing of catalog questions.
pub fn render_questions(questions: &[&Question]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Category", "Trait", "Type", "Answer", "Prompt"]);

    for q in questions {
        table.add_row(vec![
            q.id.to_string(),
            q.category.label().to_string(),
            q.trait_key.to_string(),
            q.response_type.to_string(),
            answer_hint(q),
            q.prompt.to_string(),
        ]);
    }
    format!("{table}\n{} question(s)", questions.len())
}

pub fn render_questions_json(questions: &[&Question]) -> Result<String> {
    Ok(serde_json::to_string_pretty(questions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Category};

    #[test]
    fn test_listing_includes_answer_hints() {
        let questions: Vec<_> = catalog::by_category(Category::Communication).collect();
        let out = render_questions(&questions);
        assert!(out.contains("a/b/c/d"));
        assert!(out.contains("1-5"));
        assert!(out.ends_with("4 question(s)"));
    }

    #[test]
    fn test_json_listing_keeps_options() {
        let questions: Vec<_> = catalog::all().iter().collect();
        let json: serde_json::Value =
            serde_json::from_str(&render_questions_json(&questions).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), catalog::all().len());
        assert_eq!(json[0]["options"][1]["score"], 100.0);
    }
}
