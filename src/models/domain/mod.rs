pub mod quiz;
pub mod quiz_question;

pub use quiz::{NewQuiz, Quiz};
pub use quiz_question::QuizQuestion;
