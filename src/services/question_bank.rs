use std::sync::Arc;

use serde_json::json;

use crate::models::question::{
    AnswerKey, ChoiceDetails, MatchingDetails, MatchingItem, Question, QuestionDetails,
    QuestionType,
};

/// Immutable, ordered question catalog. Question ids are dense `0..total`,
/// which the progression rules rely on. Cheap to clone into handlers.
#[derive(Clone)]
pub struct QuestionBank {
    questions: Arc<Vec<Question>>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }

    /// The Defensive IQ catalog served by default.
    pub fn builtin() -> Self {
        Self::new(builtin_questions())
    }

    pub fn get(&self, id: i32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

fn builtin_questions() -> Vec<Question> {
    let defenses = vec![
        "One-on-one".to_string(),
        "Zone".to_string(),
        "Box and 1".to_string(),
    ];

    vec![
        Question {
            id: 0,
            question_type: QuestionType::Matching,
            question: "MATCH THE DEFENSE TO ITS DESCRIPTION".into(),
            points: 15,
            // Ordered per-item keys, compared as one sequence.
            correct: AnswerKey::Scalar(json!(["One-on-one", "Zone", "Box and 1"])),
            details: QuestionDetails::Matching(MatchingDetails {
                items: vec![
                    MatchingItem {
                        term: "Each player guards one opponent".into(),
                        options: defenses.clone(),
                        correct: "One-on-one".into(),
                    },
                    MatchingItem {
                        term: "Guards space instead of players".into(),
                        options: defenses.clone(),
                        correct: "Zone".into(),
                    },
                    MatchingItem {
                        term: "A mix: 4 in zone, 1 on star player".into(),
                        options: defenses.clone(),
                        correct: "Box and 1".into(),
                    },
                ],
            }),
        },
        Question {
            id: 1,
            question_type: QuestionType::MultipleChoiceExplanation,
            question: "YOU ARE COACHING A TEAM WITH SLOW DEFENDERS. WHICH STRATEGY DO YOU USE AND WHY?"
                .into(),
            points: 20,
            correct: AnswerKey::Scalar(json!("Zone")),
            details: QuestionDetails::Choice(ChoiceDetails {
                options: vec!["Box and 1".into(), "Zone".into(), "One-on-one".into()],
            }),
        },
        Question {
            id: 2,
            question_type: QuestionType::MultipleChoiceExplanation,
            question: "YOUR OPPONENT HAS A SUPERSTAR. WHICH STRATEGY DO YOU USE AND WHY?".into(),
            points: 20,
            correct: AnswerKey::Scalar(json!("Box and 1")),
            details: QuestionDetails::Choice(ChoiceDetails {
                options: vec!["Box and 1".into(), "Zone".into(), "One-on-one".into()],
            }),
        },
        Question {
            id: 3,
            question_type: QuestionType::MultipleSelect,
            question: "WHAT ARE THE PROS OF ONE-ON-ONE DEFENSE?".into(),
            points: 15,
            correct: AnswerKey::Set(vec![
                "Builds individual accountability".into(),
                "High pressure on ball-handler".into(),
            ]),
            details: QuestionDetails::Choice(ChoiceDetails {
                options: vec![
                    "Great for team with slow or undersized players".into(),
                    "Coverage Flexibility".into(),
                    "Builds individual accountability".into(),
                    "High pressure on ball-handler".into(),
                ],
            }),
        },
        Question {
            id: 4,
            question_type: QuestionType::MultipleSelect,
            question: "WHAT ARE THE PROS OF ZONE DEFENSE?".into(),
            points: 15,
            correct: AnswerKey::Set(vec![
                "Great for team with slow or undersized players".into(),
            ]),
            details: QuestionDetails::Choice(ChoiceDetails {
                options: vec![
                    "Lockdown players".into(),
                    "Great for team with slow or undersized players".into(),
                    "Builds individual accountability".into(),
                    "High pressure on ball-handler".into(),
                ],
            }),
        },
    ]
}
