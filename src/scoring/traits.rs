//! Display names and descriptions for trait keys.

/// Description used for traits without a registered entry.
pub const GENERIC_TRAIT_DESCRIPTION: &str = "Core collaboration skill";

const TRAIT_DESCRIPTIONS: &[(&str, &str)] = &[
    ("clarity", "Ability to convey ideas clearly and understandably"),
    ("listening", "Active listening and responsive engagement"),
    ("tone_awareness", "Sensitivity to emotional context and tone"),
    ("feedback_handling", "Constructive response to input and critique"),
    ("team_adaptability", "Flexibility in different team dynamics"),
    ("trust_building", "Creating reliable, open relationships"),
    ("conflict_management", "Navigating disagreements effectively"),
    ("shared_ownership", "Supporting collective success"),
    ("digital_communication", "Effectiveness in virtual environments"),
    ("group_dynamics", "Performance in group settings"),
];

/// `tone_awareness` -> `Tone Awareness`
pub fn format_trait_name(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn trait_description(key: &str) -> &'static str {
    TRAIT_DESCRIPTIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, description)| *description)
        .unwrap_or(GENERIC_TRAIT_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_trait_name() {
        assert_eq!(format_trait_name("tone_awareness"), "Tone Awareness");
        assert_eq!(format_trait_name("listening"), "Listening");
        assert_eq!(
            format_trait_name("harmony_followthrough"),
            "Harmony Followthrough"
        );
    }

    #[test]
    fn test_format_trait_name_keeps_empty_segments() {
        assert_eq!(format_trait_name("a__b"), "A  B");
        assert_eq!(format_trait_name(""), "");
    }

    #[test]
    fn test_known_and_fallback_descriptions() {
        assert_eq!(
            trait_description("trust_building"),
            "Creating reliable, open relationships"
        );
        assert_eq!(
            trait_description("openness_feedback"),
            GENERIC_TRAIT_DESCRIPTION
        );
    }
}
