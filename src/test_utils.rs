#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::dto::request::{CreateQuizRequest, QuestionInput};

    /// Creates a well-formed question with the given text.
    pub fn test_question(text: &str) -> QuestionInput {
        QuestionInput {
            question_text: text.to_string(),
            option_a: "Option A".to_string(),
            option_b: "Option B".to_string(),
            option_c: "Option C".to_string(),
            option_d: "Option D".to_string(),
            correct_option: "a".to_string(),
        }
    }

    /// Creates an unscheduled quiz request with `question_count` questions.
    pub fn create_quiz_request(title: &str, question_count: usize) -> CreateQuizRequest {
        let questions = (1..=question_count)
            .map(|i| test_question(&format!("Question {}", i)))
            .collect();

        CreateQuizRequest {
            title: title.to_string(),
            description: format!("A quiz about {}", title),
            is_trivia: false,
            topic: None,
            start_time: None,
            end_time: None,
            duration: 30,
            positive_mark: 1,
            negative_mark: 0,
            navigation_type: "omni".to_string(),
            tab_switch_exit: true,
            difficulty: None,
            questions,
        }
    }

    /// A quiz-creation payload as the model would emit it, with
    /// `question_count` questions.
    pub fn generated_quiz_json(title: &str, question_count: usize) -> Value {
        let questions: Vec<Value> = (1..=question_count)
            .map(|i| {
                json!({
                    "question_text": format!("Question {}", i),
                    "option_a": "Option A",
                    "option_b": "Option B",
                    "option_c": "Option C",
                    "option_d": "Option D",
                    "correct_option": "a"
                })
            })
            .collect();

        json!({
            "intent": "quiz_creation",
            "title": title,
            "description": format!("A quiz about {}", title),
            "duration": 20,
            "positive_mark": 1,
            "negative_mark": 0,
            "navigation_type": "omni",
            "tab_switch_exit": true,
            "start_time": null,
            "end_time": null,
            "is_trivia": false,
            "questions": questions
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_question_is_valid() {
        let question = test_question("What is Rust?");
        assert!(question.validate_bounds().is_ok());
    }

    #[test]
    fn test_fixtures_request_has_requested_count() {
        let request = create_quiz_request("Cars", 5);
        assert_eq!(request.questions.len(), 5);
        assert_eq!(request.title, "Cars");
    }

    #[test]
    fn test_fixtures_generated_json_shape() {
        let value = generated_quiz_json("Cars", 2);
        assert_eq!(value["intent"], "quiz_creation");
        assert_eq!(value["questions"].as_array().unwrap().len(), 2);
    }
}
