use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{CreateQuizRequest, TriviaQuery},
};

#[post("/api/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let summary = state
        .quiz_service
        .create_quiz(request.into_inner(), &auth.0.sub)
        .await?;

    Ok(HttpResponse::Created().json(summary))
}

/// Lists the caller's own quizzes.
#[get("/api/quizzes/mine")]
async fn get_my_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_my_quizzes(&auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

/// Lists public trivia quizzes, optionally filtered by topic and difficulty.
#[get("/api/quizzes/trivia")]
async fn get_trivia_quizzes(
    state: web::Data<AppState>,
    query: web::Query<TriviaQuery>,
) -> Result<HttpResponse, AppError> {
    let quizzes = state
        .quiz_service
        .list_trivia(query.topic.as_deref(), query.difficulty.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}
