use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::MongoQuizRepository,
    services::{
        gemini_service::GeminiClient, generation_service::GenerationService,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub generation_service: Arc<GenerationService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let quiz_service = Arc::new(QuizService::new(quiz_repository));

        let model_client = Arc::new(GeminiClient::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        ));
        let generation_service = Arc::new(GenerationService::new(
            model_client,
            Arc::clone(&quiz_service),
        ));

        let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));

        Ok(Self {
            quiz_service,
            generation_service,
            jwt_service,
            config: Arc::new(config),
        })
    }
}
