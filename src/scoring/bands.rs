/// Qualitative band for any 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum ScoreBand {
    NeedsWork,
    Average,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 55.0 {
            Self::Average
        } else {
            Self::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsWork => "Needs Work",
        }
    }
}

/// Next-step guidance derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Recommendation {
    CollaborateConfidently,
    GrowAndCalibrate,
    ReassessAndPractice,
}

impl Recommendation {
    pub fn from_score(overall: f64) -> Self {
        if overall >= 85.0 {
            Self::CollaborateConfidently
        } else if overall >= 65.0 {
            Self::GrowAndCalibrate
        } else {
            Self::ReassessAndPractice
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CollaborateConfidently => "Collaborate Confidently",
            Self::GrowAndCalibrate => "Grow & Calibrate",
            Self::ReassessAndPractice => "Reassess & Practice",
        }
    }

    /// Glyph shown next to the label, with an ASCII fallback.
    pub fn marker(&self) -> (&'static str, &'static str) {
        match self {
            Self::CollaborateConfidently => ("✅", "[+]"),
            Self::GrowAndCalibrate => ("🟡", "[~]"),
            Self::ReassessAndPractice => ("🔴", "[!]"),
        }
    }
}
