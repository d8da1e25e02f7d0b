use serde::Deserialize;
use validator::Validate;

const MAX_QUESTION_TEXT_CHARS: usize = 500;
const MAX_OPTION_CHARS: usize = 200;

/// Natural-language input for the quiz-generation endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 10000))]
    pub prompt: String,
}

/// A quiz as supplied by a caller or parsed out of an AI response. Defaults
/// mirror the platform's standard quiz settings.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub is_trivia: bool,

    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub start_time: Option<String>,

    #[serde(default)]
    pub end_time: Option<String>,

    #[serde(default = "default_duration")]
    pub duration: i64,

    #[serde(default = "default_positive_mark")]
    pub positive_mark: i32,

    #[serde(default)]
    pub negative_mark: i32,

    #[serde(default = "default_navigation_type")]
    pub navigation_type: String,

    #[serde(default = "default_tab_switch_exit")]
    pub tab_switch_exit: bool,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub questions: Vec<QuestionInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionInput {
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
}

impl QuestionInput {
    /// Checks each text bound in turn and reports the first violation.
    pub fn validate_bounds(&self) -> Result<(), String> {
        if self.question_text.chars().count() > MAX_QUESTION_TEXT_CHARS {
            return Err(format!(
                "Question text cannot exceed {} characters",
                MAX_QUESTION_TEXT_CHARS
            ));
        }

        let options = [
            ("A", &self.option_a),
            ("B", &self.option_b),
            ("C", &self.option_c),
            ("D", &self.option_d),
        ];
        for (label, option) in options {
            if option.chars().count() > MAX_OPTION_CHARS {
                return Err(format!(
                    "Option {} cannot exceed {} characters",
                    label, MAX_OPTION_CHARS
                ));
            }
        }

        if !matches!(self.correct_option.as_str(), "a" | "b" | "c" | "d") {
            return Err("Correct option must be 'a', 'b', 'c', or 'd'".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriviaQuery {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

fn default_duration() -> i64 {
    60
}

fn default_positive_mark() -> i32 {
    1
}

fn default_navigation_type() -> String {
    "omni".to_string()
}

fn default_tab_switch_exit() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn create_quiz_request_fills_defaults() {
        let request: CreateQuizRequest = serde_json::from_str(
            r#"{"title": "Cars", "description": "All about cars"}"#,
        )
        .expect("minimal request should deserialize");

        assert_eq!(request.duration, 60);
        assert_eq!(request.positive_mark, 1);
        assert_eq!(request.negative_mark, 0);
        assert_eq!(request.navigation_type, "omni");
        assert!(request.tab_switch_exit);
        assert!(!request.is_trivia);
        assert!(request.questions.is_empty());
        assert!(request.start_time.is_none());
        assert!(request.end_time.is_none());
    }

    #[test]
    fn generate_request_rejects_empty_prompt() {
        let request = GenerateQuizRequest {
            prompt: String::new(),
        };
        assert!(request.validate().is_err());

        let request = GenerateQuizRequest {
            prompt: "Create a quiz on cars".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn question_within_bounds_passes() {
        let question = fixtures::test_question("What keyword declares a variable?");
        assert!(question.validate_bounds().is_ok());
    }

    #[test]
    fn question_text_over_limit_names_the_field() {
        let mut question = fixtures::test_question("q");
        question.question_text = "x".repeat(501);

        let err = question.validate_bounds().unwrap_err();
        assert_eq!(err, "Question text cannot exceed 500 characters");
    }

    #[test]
    fn each_option_is_independently_bounded() {
        for (idx, label) in ["A", "B", "C", "D"].iter().enumerate() {
            let mut question = fixtures::test_question("q");
            let long = "x".repeat(201);
            match idx {
                0 => question.option_a = long,
                1 => question.option_b = long,
                2 => question.option_c = long,
                _ => question.option_d = long,
            }

            let err = question.validate_bounds().unwrap_err();
            assert_eq!(
                err,
                format!("Option {} cannot exceed 200 characters", label)
            );
        }
    }

    #[test]
    fn option_at_exact_limit_passes() {
        let mut question = fixtures::test_question("q");
        question.option_b = "x".repeat(200);
        question.question_text = "x".repeat(500);

        assert!(question.validate_bounds().is_ok());
    }

    #[test]
    fn correct_option_outside_enum_fails() {
        let mut question = fixtures::test_question("q");
        question.correct_option = "e".to_string();

        let err = question.validate_bounds().unwrap_err();
        assert_eq!(err, "Correct option must be 'a', 'b', 'c', or 'd'");
    }
}
