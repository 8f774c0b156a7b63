use crate::assessment::AssessmentResult;
use crate::scoring::{coach_rows, CoachRow, Recommendation, ScoreBand};
use anyhow::Result;
use serde::Serialize;

/// Exported document: the result plus display-ready derived fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub tool_version: &'static str,
    #[serde(flatten)]
    pub result: &'a AssessmentResult,
    pub overall_band: &'static str,
    pub recommendation: &'static str,
    pub coach_dimensions: Vec<CoachRow>,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a AssessmentResult) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION"),
            result,
            overall_band: ScoreBand::from_score(result.overall_score).label(),
            recommendation: Recommendation::from_score(result.overall_score).label(),
            coach_dimensions: coach_rows(result),
        }
    }
}

pub fn render_json(result: &AssessmentResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(result))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compute_result;
    use crate::Response;
    use serde_json::Value;

    #[test]
    fn test_json_report_structure() {
        let result = compute_result(&[
            Response::new("comm_clarity_1", 100.0),
            Response::new("comm_listening_1", 100.0),
        ]);
        let json: Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();

        assert_eq!(json["communicationScore"], 100.0);
        assert_eq!(json["communicationStyle"], "Empathic Clarifier");
        assert!(json["coachScores"].as_object().unwrap().is_empty());
        assert_eq!(json["coachDimensions"].as_array().unwrap().len(), 5);
        assert_eq!(json["recommendation"], "Reassess & Practice");
        assert_eq!(json["traitScores"][0]["name"], "Clarity");
    }
}
