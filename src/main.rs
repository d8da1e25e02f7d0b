use actix_web::{middleware::Logger, web, App, HttpServer};

use quizforge_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::chatbot_greeting)
            .service(handlers::generate_quiz)
            .service(handlers::create_quiz)
            // Fixed paths must be registered before the `{id}` catch-all.
            .service(handlers::get_my_quizzes)
            .service(handlers::get_trivia_quizzes)
            .service(handlers::get_quiz)
    })
    .bind((host, port))?
    .run()
    .await
}
