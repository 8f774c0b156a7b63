//! The authored question table.

use super::{Category, Question, QuestionOption, ResponseType};

/// Placeholder fields shared by every entry; each entry overrides what it needs.
const BASE: Question = Question {
    id: "",
    response_type: ResponseType::Likert,
    category: Category::Communication,
    trait_key: "",
    title: "",
    prompt: "",
    scenario: None,
    options: &[],
    scale: None,
    min_label: None,
    max_label: None,
};

pub static QUESTIONS: &[Question] = &[
    // Communication
    Question {
        id: "comm_clarity_1",
        response_type: ResponseType::Scenario,
        category: Category::Communication,
        trait_key: "clarity",
        title: "Team Email Misunderstanding",
        scenario: Some(
            "A teammate misunderstood your project summary email and made a mistake.",
        ),
        prompt: "What do you do next?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Resend the same email and ask them to read more carefully",
                score: 25.0,
            },
            QuestionOption {
                id: "b",
                text: "Call them to clarify verbally and ensure shared understanding",
                score: 100.0,
            },
            QuestionOption {
                id: "c",
                text: "Ask your manager to clarify it to them",
                score: 40.0,
            },
            QuestionOption {
                id: "d",
                text: "Avoid confrontation and fix the mistake yourself",
                score: 10.0,
            },
        ],
        ..BASE
    },
    Question {
        id: "comm_listening_1",
        category: Category::Communication,
        trait_key: "listening",
        title: "Active Listening Self-Assessment",
        prompt: "I listen without planning my reply while someone else is speaking.",
        scale: Some(5),
        ..BASE
    },
    Question {
        id: "comm_tone_1",
        category: Category::Communication,
        trait_key: "tone_awareness",
        title: "Tone Awareness",
        prompt: "I reflect on how my tone might be received by others.",
        scale: Some(5),
        ..BASE
    },
    Question {
        id: "comm_feedback_1",
        category: Category::Communication,
        trait_key: "feedback_handling",
        title: "Feedback Reception",
        prompt: "I often check to see if others have truly understood what I've communicated.",
        scale: Some(5),
        ..BASE
    },
    // Collaboration
    Question {
        id: "collab_conflict_1",
        response_type: ResponseType::Scenario,
        category: Category::Collaboration,
        trait_key: "conflict_management",
        title: "Meeting Conflict",
        scenario: Some("In a group meeting, two members argue heatedly. The meeting is derailed."),
        prompt: "What do you do?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Step in, name the tension, and facilitate a compromise",
                score: 100.0,
            },
            QuestionOption {
                id: "b",
                text: "Wait for someone senior to handle it",
                score: 30.0,
            },
            QuestionOption {
                id: "c",
                text: "Send a private message to the louder teammate to calm down",
                score: 60.0,
            },
            QuestionOption {
                id: "d",
                text: "Avoid involvement and continue with your task",
                score: 10.0,
            },
        ],
        ..BASE
    },
    Question {
        id: "collab_adaptability_1",
        response_type: ResponseType::Slider,
        category: Category::Collaboration,
        trait_key: "team_adaptability",
        title: "Team Adaptability",
        prompt: "I adjust my approach based on who I'm working with.",
        min_label: Some("Never"),
        max_label: Some("Always"),
        scale: Some(100),
        ..BASE
    },
    Question {
        id: "collab_trust_1",
        response_type: ResponseType::Slider,
        category: Category::Collaboration,
        trait_key: "trust_building",
        title: "Trust Building",
        prompt: "I believe compromise is a sign of strength, not weakness.",
        min_label: Some("Strongly Disagree"),
        max_label: Some("Strongly Agree"),
        scale: Some(100),
        ..BASE
    },
    Question {
        id: "collab_ownership_1",
        response_type: ResponseType::Slider,
        category: Category::Collaboration,
        trait_key: "shared_ownership",
        title: "Shared Ownership",
        prompt: "I support teammates even if it doesn't benefit me directly.",
        min_label: Some("Never"),
        max_label: Some("Always"),
        scale: Some(100),
        ..BASE
    },
    // Contextual
    Question {
        id: "context_tone_1",
        response_type: ResponseType::Scenario,
        category: Category::Contextual,
        trait_key: "digital_communication",
        title: "Digital Tone Interpretation",
        scenario: Some(
            "You receive this Slack message: \"Why didn't you flag that earlier? It's kind of late now.\"",
        ),
        prompt: "What's the likely tone?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Aggressive",
                score: 40.0,
            },
            QuestionOption {
                id: "b",
                text: "Neutral",
                score: 20.0,
            },
            QuestionOption {
                id: "c",
                text: "Frustrated",
                score: 100.0,
            },
            QuestionOption {
                id: "d",
                text: "Encouraging",
                score: 10.0,
            },
        ],
        ..BASE
    },
    Question {
        id: "context_group_1",
        category: Category::Contextual,
        trait_key: "group_dynamics",
        title: "Group Meeting Dynamics",
        prompt: "In group meetings, I actively synthesize different viewpoints to find common ground.",
        scale: Some(5),
        ..BASE
    },
    // COACH framework
    Question {
        id: "coach_clarity_1",
        category: Category::Coach,
        trait_key: "clarity_comprehension",
        title: "Clarity & Comprehension",
        prompt: "When someone misunderstands me, I take full ownership and reframe the message.",
        scale: Some(5),
        ..BASE
    },
    Question {
        id: "coach_openness_1",
        category: Category::Coach,
        trait_key: "openness_feedback",
        title: "Openness & Feedback",
        prompt: "I actively seek feedback and create psychological safety for others to share honest input.",
        scale: Some(5),
        ..BASE
    },
    Question {
        id: "coach_alignment_1",
        response_type: ResponseType::Scenario,
        category: Category::Coach,
        trait_key: "alignment_empathy",
        title: "Alignment & Empathy",
        scenario: Some("A teammate withdraws after receiving critical feedback."),
        prompt: "How do you approach them?",
        options: &[
            QuestionOption {
                id: "a",
                text: "Give them space and wait for them to come around",
                score: 40.0,
            },
            QuestionOption {
                id: "b",
                text: "Check in privately, acknowledge their feelings, and offer support",
                score: 100.0,
            },
            QuestionOption {
                id: "c",
                text: "Address it in the next team meeting publicly",
                score: 20.0,
            },
            QuestionOption {
                id: "d",
                text: "Focus on the work and let HR handle personal issues",
                score: 10.0,
            },
        ],
        ..BASE
    },
    Question {
        id: "coach_conflict_1",
        category: Category::Coach,
        trait_key: "conflict_navigation",
        title: "Conflict Navigation",
        prompt: "I can remain emotionally regulated and fair during heated disagreements.",
        scale: Some(5),
        ..BASE
    },
    Question {
        id: "coach_harmony_1",
        category: Category::Coach,
        trait_key: "harmony_followthrough",
        title: "Harmony & Follow-Through",
        prompt: "I consistently follow through on commitments and encourage team cohesion.",
        scale: Some(5),
        ..BASE
    },
];
