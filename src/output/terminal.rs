use crate::assessment::AssessmentResult;
use crate::formatting::{FormattingConfig, ReportStyle};
use crate::scoring::{coach_rows, Recommendation, ScoreBand};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use std::fmt::Write;

fn new_table(plain: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if plain { ASCII_FULL } else { UTF8_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn score_cell(score: f64) -> String {
    format!("{:.0} ({})", score, ScoreBand::from_score(score).label())
}

pub fn render_terminal(result: &AssessmentResult, formatting: FormattingConfig) -> String {
    let style = ReportStyle::new(formatting);
    let plain = formatting == FormattingConfig::plain();
    let mut out = String::new();

    let recommendation = Recommendation::from_score(result.overall_score);
    let (glyph, fallback) = recommendation.marker();

    let _ = writeln!(
        out,
        "{}",
        style.header("Collaboration & Communication Intelligence Results")
    );
    let _ = writeln!(
        out,
        "Overall score: {} / 100  {} {}",
        style.score(result.overall_score),
        style.emoji(glyph, fallback),
        style.bold(recommendation.label())
    );
    let _ = writeln!(
        out,
        "Communication style: {}",
        style.bold(&result.communication_style)
    );
    let _ = writeln!(
        out,
        "Collaboration style: {}",
        style.bold(&result.collaboration_style)
    );
    out.push('\n');

    let mut categories = new_table(plain);
    categories.set_header(vec!["Intelligence", "Score"]);
    categories.add_row(vec![
        "Communication".to_string(),
        score_cell(result.communication_score),
    ]);
    categories.add_row(vec![
        "Collaboration".to_string(),
        score_cell(result.collaboration_score),
    ]);
    categories.add_row(vec![
        "Contextual".to_string(),
        score_cell(result.contextual_score),
    ]);
    let _ = writeln!(out, "{categories}\n");

    let _ = writeln!(out, "{}", style.header("COACH Framework"));
    let mut coach = new_table(plain);
    coach.set_header(vec!["", "Dimension", "Score", "Focus"]);
    for row in coach_rows(result) {
        let score = if row.measured {
            score_cell(row.score)
        } else {
            "-".to_string()
        };
        coach.add_row(vec![
            row.code.to_string(),
            row.name.to_string(),
            score,
            row.description.to_string(),
        ]);
    }
    let _ = writeln!(out, "{coach}\n");

    if !result.trait_scores.is_empty() {
        let _ = writeln!(out, "{}", style.header("Trait Scores"));
        let mut traits = new_table(plain);
        traits.set_header(vec!["Trait", "Score", "Description"]);
        for t in &result.trait_scores {
            traits.add_row(vec![t.name.clone(), score_cell(t.score), t.description.clone()]);
        }
        let _ = writeln!(out, "{traits}\n");
    }

    let _ = writeln!(out, "{}", style.header("Top Strengths"));
    for name in &result.top_strengths {
        let _ = writeln!(out, "  {} {}", style.emoji("✓", "+"), style.strength(name));
    }
    out.push('\n');

    let _ = writeln!(out, "{}", style.header("Growth Areas"));
    for name in &result.growth_areas {
        let _ = writeln!(out, "  {} {}", style.emoji("↗", ">"), style.growth(name));
    }

    if result.trait_scores.is_empty() {
        out.push('\n');
        let _ = writeln!(
            out,
            "{}",
            style.dim("No responses matched the question catalog; showing default lists.")
        );
    }

    out
}
