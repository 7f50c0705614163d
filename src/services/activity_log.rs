use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::models::lesson::LessonActivity;
use crate::models::submission::SubmittedAnswer;
use crate::services::scoring::{ScoreSummary, ScoringService};

/// Append-only record of quiz submissions, shared by every request
/// handler. Appends are serialized behind the mutex.
#[derive(Clone)]
pub struct SubmissionLog {
    entries: Arc<Mutex<Vec<SubmittedAnswer>>>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, question_id: i32, answer: JsonValue, is_correct: bool) -> SubmittedAnswer {
        let entry = SubmittedAnswer {
            id: Uuid::new_v4(),
            question_id,
            answer,
            is_correct,
            submitted_at: Utc::now(),
        };
        let mut entries = self.entries.lock().expect("submission log mutex poisoned");
        entries.push(entry.clone());
        entry
    }

    pub fn score(&self) -> ScoreSummary {
        let entries = self.entries.lock().expect("submission log mutex poisoned");
        ScoringService::compute(&entries)
    }

    pub fn snapshot(&self) -> Vec<SubmittedAnswer> {
        self.entries
            .lock()
            .expect("submission log mutex poisoned")
            .clone()
    }
}

impl Default for SubmissionLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Append-only record of lesson-page interactions.
#[derive(Clone)]
pub struct LessonLog {
    entries: Arc<Mutex<Vec<LessonActivity>>>,
}

impl LessonLog {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, lesson_id: i64, selection: JsonValue) -> LessonActivity {
        let entry = LessonActivity {
            id: Uuid::new_v4(),
            lesson_id,
            selection,
            recorded_at: Utc::now(),
        };
        let mut entries = self.entries.lock().expect("lesson log mutex poisoned");
        entries.push(entry.clone());
        entry
    }

    pub fn snapshot(&self) -> Vec<LessonActivity> {
        self.entries
            .lock()
            .expect("lesson log mutex poisoned")
            .clone()
    }
}

impl Default for LessonLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submissions_append_and_score() {
        let log = SubmissionLog::new();
        log.record(0, json!("Zone"), true);
        log.record(0, json!("Box and 1"), false);
        log.record(1, JsonValue::Null, false);

        assert_eq!(log.snapshot().len(), 3);
        assert_eq!(log.score(), ScoreSummary { score: 1, total: 3 });
    }

    #[test]
    fn lesson_activities_append() {
        let log = LessonLog::new();
        log.record(1, json!("zone-intro"));
        log.record(2, JsonValue::Null);

        let entries = log.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].lesson_id, 1);
    }
}
