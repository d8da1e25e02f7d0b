use std::sync::Arc;
use validator::Validate;

use crate::{
    constants::quiz_prompt::QUIZ_BOT_PROMPT,
    errors::{AppError, AppResult},
    models::dto::{
        request::GenerateQuizRequest,
        response::GenerateQuizResponse,
    },
    services::{
        gemini_service::TextCompletionClient,
        intent::{self, GeneratedIntent},
        quiz_service::QuizService,
        sanitizer, schedule,
    },
};

/// Drives one natural-language request through prompt composition, the model
/// call, sanitization, routing, and (for creation intents) persistence.
pub struct GenerationService {
    model_client: Arc<dyn TextCompletionClient>,
    quiz_service: Arc<QuizService>,
}

impl GenerationService {
    pub fn new(model_client: Arc<dyn TextCompletionClient>, quiz_service: Arc<QuizService>) -> Self {
        Self {
            model_client,
            quiz_service,
        }
    }

    pub async fn generate_quiz(
        &self,
        request: GenerateQuizRequest,
        creator_id: &str,
    ) -> AppResult<GenerateQuizResponse> {
        request.validate()?;

        let full_prompt = compose_prompt(&request.prompt);

        let raw = self.model_client.complete(&full_prompt).await?;
        if raw.is_empty() {
            return Err(AppError::AiError("Gemini returned empty response".to_string()));
        }

        let parsed = sanitizer::extract_json(&raw)?;

        match intent::route(parsed)? {
            GeneratedIntent::NonQuiz { message } => {
                log::info!("Generation request classified as non-quiz");
                Ok(GenerateQuizResponse::rejected("non_quiz", message))
            }
            GeneratedIntent::Unclear => {
                log::info!("Generation request classified as unclear");
                Ok(GenerateQuizResponse::rejected(
                    "unclear",
                    intent::UNCLEAR_MESSAGE.to_string(),
                ))
            }
            GeneratedIntent::QuizCreation(mut quiz_request) => {
                // The chatbot only produces regular private quizzes.
                quiz_request.is_trivia = false;
                quiz_request.topic = None;
                quiz_request.difficulty = None;

                let question_count = quiz_request.questions.len();
                let summary = self.quiz_service.create_quiz(quiz_request, creator_id).await?;

                log::info!(
                    "Generated quiz {} with {} questions from prompt",
                    summary.quiz_id,
                    question_count
                );

                Ok(GenerateQuizResponse::created(
                    summary,
                    question_count,
                    &request.prompt,
                ))
            }
        }
    }
}

fn compose_prompt(user_input: &str) -> String {
    let now = schedule::now_ist();
    let instructions = QUIZ_BOT_PROMPT.replace("{current_time}", &now.to_rfc3339());

    format!(
        "{instructions}\n\nUser's natural language input:\n\"{user_input}\"\n\n\
         Parse this input and generate a complete quiz with questions. Make sure to:\n\
         1. Extract the topic and create a relevant title and description\n\
         2. Parse any time-related information (relative times like \"10 minutes from now\")\n\
         3. Extract number of questions, duration, marking scheme if mentioned\n\
         4. Generate high-quality questions relevant to the topic\n\
         5. Return only valid JSON in the specified format"
    )
}
