use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    constants::quiz_prompt::GREETING_MESSAGE,
    errors::AppError,
    models::dto::request::GenerateQuizRequest,
};

/// Chatbot greeting and usage instructions.
#[get("/api/chatbot")]
async fn chatbot_greeting(_auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "message": GREETING_MESSAGE,
        "purpose": "I'm designed specifically for quiz creation - not for general conversation.",
        "instructions": "To create a quiz, describe what kind of quiz you want in plain English!",
        "input_format": {
            "prompt": "Your natural language description of the quiz you want to create"
        },
        "examples": [
            "Create a quiz on cars with 10 questions, duration 20 minutes",
            "I want a Python programming quiz with 15 questions, 45 minutes long",
            "Generate a history quiz about World War 2, 12 questions",
            "Make a science quiz on physics, 8 questions, 30 minutes duration",
            "Create a general knowledge quiz, 20 questions, 2 marks per question"
        ],
        "supported_features": [
            "Any topic or subject",
            "Custom number of questions (1-20)",
            "Duration in minutes",
            "Start time scheduling",
            "Positive and negative marking"
        ],
        "usage": "POST /api/chatbot/generate with body: { \"prompt\": \"your quiz creation request\" }"
    })))
}

/// Generates and persists a quiz from a natural-language prompt.
#[post("/api/chatbot/generate")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state
        .generation_service
        .generate_quiz(request.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
