use serde::{Deserialize, Serialize};

use crate::models::dto::request::QuestionInput;

/// A persisted question, tagged with its quiz and the quiz's positive mark.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub quiz_id: String,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: String,
    pub mark: i32,
}

impl QuizQuestion {
    pub fn from_input(quiz_id: &str, input: &QuestionInput, mark: i32) -> Self {
        QuizQuestion {
            quiz_id: quiz_id.to_string(),
            question_text: input.question_text.clone(),
            option_a: input.option_a.clone(),
            option_b: input.option_b.clone(),
            option_c: input.option_c.clone(),
            option_d: input.option_d.clone(),
            correct_option: input.correct_option.clone(),
            mark,
        }
    }
}
