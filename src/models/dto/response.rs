use serde::Serialize;

/// Identifier and title of a freshly persisted quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    pub quiz_id: String,
    pub title: String,
}

/// Response body for the generation endpoint. Optional fields are only
/// populated when a quiz was actually created.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuizResponse {
    pub success: bool,
    pub intent: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_generated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_from: Option<String>,
    pub is_quiz_request: bool,
}

impl GenerateQuizResponse {
    pub fn rejected(intent: &str, message: String) -> Self {
        GenerateQuizResponse {
            success: false,
            intent: intent.to_string(),
            message,
            quiz_id: None,
            quiz_title: None,
            questions_generated: None,
            redirect_message: None,
            parsed_from: None,
            is_quiz_request: false,
        }
    }

    pub fn created(summary: QuizSummary, questions_generated: usize, parsed_from: &str) -> Self {
        GenerateQuizResponse {
            success: true,
            intent: "quiz_creation".to_string(),
            message: format!(
                "Quiz '{}' created successfully! You can view it in your My Quizzes page.",
                summary.title
            ),
            quiz_id: Some(summary.quiz_id),
            quiz_title: Some(summary.title),
            questions_generated: Some(questions_generated),
            redirect_message: Some("Check your quiz in /my-quizzes page".to_string()),
            parsed_from: Some(parsed_from.to_string()),
            is_quiz_request: true,
        }
    }
}
