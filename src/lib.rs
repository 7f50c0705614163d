pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    activity_log::{LessonLog, SubmissionLog},
    question_bank::QuestionBank,
};

#[derive(Clone)]
pub struct AppState {
    pub question_bank: QuestionBank,
    pub submission_log: SubmissionLog,
    pub lesson_log: LessonLog,
}

impl AppState {
    pub fn new(question_bank: QuestionBank) -> Self {
        Self {
            question_bank,
            submission_log: SubmissionLog::new(),
            lesson_log: LessonLog::new(),
        }
    }
}
