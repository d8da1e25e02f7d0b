pub mod chatbot_handler;
pub mod quiz_handler;

use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

pub use chatbot_handler::{chatbot_greeting, generate_quiz};
pub use quiz_handler::{create_quiz, get_my_quizzes, get_quiz, get_trivia_quizzes};

#[get("/api/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
