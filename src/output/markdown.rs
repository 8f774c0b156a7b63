use crate::assessment::AssessmentResult;
use crate::scoring::{coach_rows, Recommendation, ScoreBand};
use std::fmt::Write;

fn band(score: f64) -> &'static str {
    ScoreBand::from_score(score).label()
}

pub fn render_markdown(result: &AssessmentResult) -> String {
    let mut out = String::new();
    let recommendation = Recommendation::from_score(result.overall_score);

    let _ = writeln!(out, "# CCI Assessment Results\n");
    let _ = writeln!(
        out,
        "**Overall score:** {:.1} ({}) - {}\n",
        result.overall_score,
        band(result.overall_score),
        recommendation.label()
    );
    let _ = writeln!(out, "- Communication style: {}", result.communication_style);
    let _ = writeln!(out, "- Collaboration style: {}\n", result.collaboration_style);

    let _ = writeln!(out, "## Intelligence Scores\n");
    let _ = writeln!(out, "| Intelligence | Score | Band |");
    let _ = writeln!(out, "|--------------|-------|------|");
    for (name, score) in [
        ("Communication", result.communication_score),
        ("Collaboration", result.collaboration_score),
        ("Contextual", result.contextual_score),
    ] {
        let _ = writeln!(out, "| {} | {:.1} | {} |", name, score, band(score));
    }
    out.push('\n');

    let _ = writeln!(out, "## COACH Framework\n");
    let _ = writeln!(out, "| | Dimension | Score | Focus |");
    let _ = writeln!(out, "|---|-----------|-------|-------|");
    for row in coach_rows(result) {
        let score = if row.measured {
            format!("{:.1}", row.score)
        } else {
            "not measured".to_string()
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            row.code, row.name, score, row.description
        );
    }
    out.push('\n');

    if !result.trait_scores.is_empty() {
        let _ = writeln!(out, "## Trait Scores\n");
        let _ = writeln!(out, "| Trait | Score | Description |");
        let _ = writeln!(out, "|-------|-------|-------------|");
        for t in &result.trait_scores {
            let _ = writeln!(out, "| {} | {:.1} | {} |", t.name, t.score, t.description);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "## Top Strengths\n");
    for name in &result.top_strengths {
        let _ = writeln!(out, "- {name}");
    }
    let _ = writeln!(out, "\n## Growth Areas\n");
    for name in &result.growth_areas {
        let _ = writeln!(out, "- {name}");
    }

    out
}
