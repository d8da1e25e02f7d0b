use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{NewQuiz, Quiz, QuizQuestion},
        dto::{request::CreateQuizRequest, response::QuizSummary},
    },
    repositories::QuizRepository,
    services::schedule,
};

const MAX_QUESTIONS_PER_QUIZ: usize = 50;

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Validates, resolves the schedule, and persists a quiz followed by its
    /// questions. The two write phases are not transactional; a failure
    /// between them leaves the quiz without questions.
    pub async fn create_quiz(
        &self,
        request: CreateQuizRequest,
        creator_id: &str,
    ) -> AppResult<QuizSummary> {
        request.validate()?;

        if request.questions.len() > MAX_QUESTIONS_PER_QUIZ {
            return Err(AppError::ValidationError(format!(
                "Maximum {} questions allowed per quiz",
                MAX_QUESTIONS_PER_QUIZ
            )));
        }
        if request.questions.is_empty() {
            return Err(AppError::ValidationError(
                "At least 1 question is required".to_string(),
            ));
        }
        if request.duration < 1 {
            return Err(AppError::ValidationError(
                "Duration must be at least 1 minute".to_string(),
            ));
        }

        for (i, question) in request.questions.iter().enumerate() {
            question.validate_bounds().map_err(|detail| {
                AppError::ValidationError(format!("Question {}: {}", i + 1, detail))
            })?;
        }

        let window = schedule::resolve_window(
            request.start_time.as_deref(),
            request.end_time.as_deref(),
            request.duration,
            schedule::now_ist(),
        )?;

        let quiz = Quiz::create(
            NewQuiz {
                title: request.title.clone(),
                description: request.description.clone(),
                is_trivia: request.is_trivia,
                topic: request.topic.clone(),
                schedule: window,
                duration: request.duration,
                positive_mark: request.positive_mark,
                negative_mark: request.negative_mark,
                navigation_type: request.navigation_type.clone(),
                tab_switch_exit: request.tab_switch_exit,
                difficulty: request.difficulty.clone(),
            },
            creator_id,
        );

        self.repository
            .insert_quiz(&quiz)
            .await
            .map_err(classify_insert_error)?;

        log::info!(
            "Created quiz {} ('{}') with {} questions",
            quiz.id,
            quiz.title,
            request.questions.len()
        );

        for question in &request.questions {
            let record = QuizQuestion::from_input(&quiz.id, question, request.positive_mark);
            self.repository.insert_question(&record).await?;
        }

        Ok(QuizSummary {
            quiz_id: quiz.id,
            title: quiz.title,
        })
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    pub async fn list_my_quizzes(&self, creator_id: &str) -> AppResult<Vec<Quiz>> {
        self.repository.list_by_creator(creator_id).await
    }

    pub async fn list_trivia(
        &self,
        topic: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<Vec<Quiz>> {
        self.repository.list_trivia(topic, difficulty).await
    }
}

/// Uniqueness conflicts are only distinguishable by the store's error text.
fn classify_insert_error(err: AppError) -> AppError {
    if let AppError::DatabaseError(message) = &err {
        let lowered = message.to_lowercase();
        if lowered.contains("duplicate") || lowered.contains("unique") {
            return AppError::DuplicateTitle;
        }
    }
    err
}
