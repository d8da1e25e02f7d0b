use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::CreateQuizRequest,
};

/// Cap on questions accepted from a single generation. Longer outputs are
/// clamped, not rejected.
pub const MAX_GENERATED_QUESTIONS: usize = 20;

pub const NON_QUIZ_FALLBACK_MESSAGE: &str =
    "I'm a Quiz Creation Bot. Please describe the quiz you want to create.";

pub const UNCLEAR_MESSAGE: &str = "I'm a Quiz Creation Bot. I can only help you create quizzes. \
     Please describe the quiz you want to create, for example: \
     'Create a quiz on Python programming with 10 questions'.";

/// Classification of a sanitized AI response.
#[derive(Debug, Clone)]
pub enum GeneratedIntent {
    NonQuiz { message: String },
    QuizCreation(CreateQuizRequest),
    Unclear,
}

/// Reads the `intent` discriminator and dispatches on it. For quiz creation
/// the remaining fields are parsed into a quiz request; an empty question
/// list is an error while an over-long one is truncated.
pub fn route(mut value: Value) -> AppResult<GeneratedIntent> {
    let intent = value
        .get("intent")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match intent.as_str() {
        "non_quiz" => {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(NON_QUIZ_FALLBACK_MESSAGE)
                .to_string();
            Ok(GeneratedIntent::NonQuiz { message })
        }
        "quiz_creation" => {
            if let Some(map) = value.as_object_mut() {
                map.remove("intent");
            }

            let mut request: CreateQuizRequest = serde_json::from_value(value)
                .map_err(|e| AppError::SchemaError(e.to_string()))?;

            if request.questions.is_empty() {
                return Err(AppError::EmptyQuiz);
            }
            if request.questions.len() > MAX_GENERATED_QUESTIONS {
                request.questions.truncate(MAX_GENERATED_QUESTIONS);
            }

            Ok(GeneratedIntent::QuizCreation(request))
        }
        _ => Ok(GeneratedIntent::Unclear),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use serde_json::json;

    #[test]
    fn non_quiz_uses_supplied_message() {
        let value = json!({"intent": "non_quiz", "message": "Hello there!"});

        match route(value).unwrap() {
            GeneratedIntent::NonQuiz { message } => assert_eq!(message, "Hello there!"),
            other => panic!("Expected NonQuiz, got {:?}", other),
        }
    }

    #[test]
    fn non_quiz_falls_back_when_message_missing() {
        let value = json!({"intent": "non_quiz"});

        match route(value).unwrap() {
            GeneratedIntent::NonQuiz { message } => {
                assert_eq!(message, NON_QUIZ_FALLBACK_MESSAGE);
            }
            other => panic!("Expected NonQuiz, got {:?}", other),
        }
    }

    #[test]
    fn missing_intent_is_unclear() {
        assert!(matches!(
            route(json!({"title": "Cars"})).unwrap(),
            GeneratedIntent::Unclear
        ));
    }

    #[test]
    fn unknown_intent_is_unclear() {
        assert!(matches!(
            route(json!({"intent": "weather_report"})).unwrap(),
            GeneratedIntent::Unclear
        ));
    }

    #[test]
    fn quiz_creation_parses_remaining_fields() {
        let value = fixtures::generated_quiz_json("Cars 101", 3);

        match route(value).unwrap() {
            GeneratedIntent::QuizCreation(request) => {
                assert_eq!(request.title, "Cars 101");
                assert_eq!(request.questions.len(), 3);
                assert_eq!(request.questions[0].correct_option, "a");
            }
            other => panic!("Expected QuizCreation, got {:?}", other),
        }
    }

    #[test]
    fn quiz_creation_with_zero_questions_is_empty_quiz() {
        let value = fixtures::generated_quiz_json("Cars 101", 0);
        assert!(matches!(route(value), Err(AppError::EmptyQuiz)));
    }

    #[test]
    fn quiz_creation_truncates_to_twenty_questions() {
        let value = fixtures::generated_quiz_json("Cars 101", 25);

        match route(value).unwrap() {
            GeneratedIntent::QuizCreation(request) => {
                assert_eq!(request.questions.len(), MAX_GENERATED_QUESTIONS);
                // The first twenty are kept in order.
                assert_eq!(request.questions[0].question_text, "Question 1");
                assert_eq!(request.questions[19].question_text, "Question 20");
            }
            other => panic!("Expected QuizCreation, got {:?}", other),
        }
    }

    #[test]
    fn quiz_creation_with_mistyped_fields_is_schema_error() {
        let value = json!({
            "intent": "quiz_creation",
            "title": "Cars",
            "description": "desc",
            "questions": "not a list"
        });

        assert!(matches!(route(value), Err(AppError::SchemaError(_))));
    }

    #[test]
    fn quiz_creation_missing_title_is_schema_error() {
        let value = json!({
            "intent": "quiz_creation",
            "description": "desc",
            "questions": []
        });

        assert!(matches!(route(value), Err(AppError::SchemaError(_))));
    }
}
