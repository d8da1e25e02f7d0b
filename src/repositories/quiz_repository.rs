use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{Quiz, QuizQuestion},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn insert_quiz(&self, quiz: &Quiz) -> AppResult<()>;
    async fn insert_question(&self, question: &QuizQuestion) -> AppResult<()>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list_by_creator(&self, creator_id: &str) -> AppResult<Vec<Quiz>>;
    async fn list_trivia<'a>(
        &self,
        topic: Option<&'a str>,
        difficulty: Option<&'a str>,
    ) -> AppResult<Vec<Quiz>>;
}

pub struct MongoQuizRepository {
    quizzes: Collection<Quiz>,
    questions: Collection<QuizQuestion>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            quizzes: db.get_collection("quizzes"),
            questions: db.get_collection("questions"),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.quizzes.create_index(id_index).await?;

        // Backs the duplicate-title rejection on insert.
        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1, "topic": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("title_topic_unique".to_string())
                    .build(),
            )
            .build();
        self.quizzes.create_index(title_index).await?;

        let question_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .build();
        self.questions.create_index(question_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert_quiz(&self, quiz: &Quiz) -> AppResult<()> {
        self.quizzes.insert_one(quiz).await?;
        Ok(())
    }

    async fn insert_question(&self, question: &QuizQuestion) -> AppResult<()> {
        self.questions.insert_one(question).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.quizzes.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list_by_creator(&self, creator_id: &str) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .quizzes
            .find(doc! { "creator_id": creator_id })
            .await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn list_trivia<'a>(
        &self,
        topic: Option<&'a str>,
        difficulty: Option<&'a str>,
    ) -> AppResult<Vec<Quiz>> {
        let mut filter = doc! { "is_trivia": true, "is_active": true };
        if let Some(topic) = topic {
            filter.insert("topic", topic);
        }
        if let Some(difficulty) = difficulty {
            filter.insert("difficulty", difficulty);
        }

        let cursor = self.quizzes.find(filter).await?;
        let items: Vec<Quiz> = cursor.try_collect().await?;
        Ok(items)
    }
}
