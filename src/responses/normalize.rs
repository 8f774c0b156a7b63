//! Map raw answers onto the 0-100 response scale.
//!
//! - scenario: the chosen option's pre-authored score
//! - likert: `position / scale * 100` for positions `1..=scale`
//! - slider / agreement: `raw / scale * 100` for raw values `0..=scale`

use crate::catalog::{Question, ResponseType};
use crate::errors::{AssessmentError, Result};
use serde::{Deserialize, Serialize};

/// A respondent's answer as captured by an input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Selected option id of a scenario item
    Option(String),
    /// 1-based position on a likert item
    Likert(u32),
    /// Raw slider position
    Slider(f64),
}

impl Answer {
    fn kind(&self) -> &'static str {
        match self {
            Answer::Option(_) => "option",
            Answer::Likert(_) => "likert",
            Answer::Slider(_) => "slider",
        }
    }

    fn accepts(&self, response_type: ResponseType) -> bool {
        matches!(
            (self, response_type),
            (Answer::Option(_), ResponseType::Scenario)
                | (Answer::Likert(_), ResponseType::Likert)
                | (Answer::Slider(_), ResponseType::Slider | ResponseType::Agreement)
        )
    }
}

/// Normalize an answer for `question` into [0, 100].
pub fn normalize_answer(question: &Question, answer: &Answer) -> Result<f64> {
    if !answer.accepts(question.response_type) {
        return Err(AssessmentError::invalid_answer(
            question.id,
            format!(
                "{} answer given for a {} question",
                answer.kind(),
                question.response_type
            ),
        ));
    }

    let scale = question.effective_scale();
    if scale == 0 && !matches!(answer, Answer::Option(_)) {
        return Err(AssessmentError::invalid_answer(
            question.id,
            "question has a zero scale",
        ));
    }

    match answer {
        Answer::Option(option_id) => question
            .option(option_id)
            .map(|option| option.score)
            .ok_or_else(|| {
                AssessmentError::invalid_answer(question.id, format!("unknown option '{option_id}'"))
            }),
        Answer::Likert(position) => {
            if (1..=scale).contains(position) {
                Ok(f64::from(*position) / f64::from(scale) * 100.0)
            } else {
                Err(AssessmentError::invalid_answer(
                    question.id,
                    format!("position {position} outside 1..={scale}"),
                ))
            }
        }
        Answer::Slider(raw) => {
            if raw.is_finite() && (0.0..=f64::from(scale)).contains(raw) {
                Ok(raw / f64::from(scale) * 100.0)
            } else {
                Err(AssessmentError::invalid_answer(
                    question.id,
                    format!("slider value {raw} outside 0..={scale}"),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn question(id: &str) -> &'static Question {
        catalog::find(id).unwrap()
    }

    #[test]
    fn test_option_answers_use_authored_score() {
        let value = normalize_answer(question("collab_conflict_1"), &Answer::Option("c".into()));
        assert_eq!(value.unwrap(), 60.0);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = normalize_answer(question("comm_clarity_1"), &Answer::Option("e".into()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown option 'e'"));
    }

    #[test]
    fn test_likert_positions_scale_to_percent() {
        let q = question("comm_listening_1");
        assert_eq!(normalize_answer(q, &Answer::Likert(1)).unwrap(), 20.0);
        assert_eq!(normalize_answer(q, &Answer::Likert(4)).unwrap(), 80.0);
        assert_eq!(normalize_answer(q, &Answer::Likert(5)).unwrap(), 100.0);
        assert!(normalize_answer(q, &Answer::Likert(0)).is_err());
        assert!(normalize_answer(q, &Answer::Likert(6)).is_err());
    }

    #[test]
    fn test_slider_values_pass_through_on_percent_scale() {
        let q = question("collab_trust_1");
        assert_eq!(normalize_answer(q, &Answer::Slider(72.0)).unwrap(), 72.0);
        assert_eq!(normalize_answer(q, &Answer::Slider(0.0)).unwrap(), 0.0);
        assert!(normalize_answer(q, &Answer::Slider(100.5)).is_err());
        assert!(normalize_answer(q, &Answer::Slider(f64::NAN)).is_err());
    }

    #[test]
    fn test_zero_scale_slider_is_rejected() {
        static ZERO_SCALE: Question = Question {
            id: "broken_slider",
            response_type: ResponseType::Slider,
            category: catalog::Category::Contextual,
            trait_key: "remote_presence",
            title: "Remote presence",
            prompt: "I keep remote colleagues in the loop.",
            scenario: None,
            options: &[],
            scale: Some(0),
            min_label: None,
            max_label: None,
        };
        let err = normalize_answer(&ZERO_SCALE, &Answer::Slider(0.0)).unwrap_err();
        assert!(err.to_string().contains("zero scale"));
    }

    #[test]
    fn test_answer_kind_must_match_response_type() {
        let err = normalize_answer(question("comm_tone_1"), &Answer::Slider(50.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid answer for 'comm_tone_1': slider answer given for a likert question"
        );
    }

    #[test]
    fn test_answer_json_shape() {
        let answer: Answer = serde_json::from_str(r#"{"likert": 3}"#).unwrap();
        assert_eq!(answer, Answer::Likert(3));
        let answer: Answer = serde_json::from_str(r#"{"option": "b"}"#).unwrap();
        assert_eq!(answer, Answer::Option("b".into()));
    }
}
