use serde::Serialize;

use crate::models::submission::SubmittedAnswer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
}

pub struct ScoringService;

impl ScoringService {
    /// Every recorded submission counts toward `total`, repeats to the same
    /// question included; `score` counts those judged correct.
    pub fn compute(entries: &[SubmittedAnswer]) -> ScoreSummary {
        ScoreSummary {
            score: entries.iter().filter(|e| e.is_correct).count(),
            total: entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn entry(question_id: i32, is_correct: bool) -> SubmittedAnswer {
        SubmittedAnswer {
            id: Uuid::new_v4(),
            question_id,
            answer: json!("x"),
            is_correct,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn empty_log_scores_zero() {
        assert_eq!(
            ScoringService::compute(&[]),
            ScoreSummary { score: 0, total: 0 }
        );
    }

    #[test]
    fn repeats_each_count() {
        let entries = vec![
            entry(0, true),
            entry(0, false),
            entry(1, true),
            entry(2, false),
        ];
        assert_eq!(
            ScoringService::compute(&entries),
            ScoreSummary { score: 2, total: 4 }
        );
    }
}
