use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::schedule;

/// A persisted quiz record. Created once by the create/generate paths and
/// never mutated by them afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub creator_id: String,
    pub is_trivia: bool,
    pub topic: Option<String>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub duration: i64, // minutes
    pub positive_mark: i32,
    pub negative_mark: i32,
    pub navigation_type: String,
    pub tab_switch_exit: bool,
    pub difficulty: Option<String>,
    pub popularity: i32,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
}

pub struct NewQuiz {
    pub title: String,
    pub description: String,
    pub is_trivia: bool,
    pub topic: Option<String>,
    pub schedule: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>,
    pub duration: i64,
    pub positive_mark: i32,
    pub negative_mark: i32,
    pub navigation_type: String,
    pub tab_switch_exit: bool,
    pub difficulty: Option<String>,
}

impl Quiz {
    pub fn create(fields: NewQuiz, creator_id: &str) -> Self {
        let (start_time, end_time) = match fields.schedule {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };

        Quiz {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            description: fields.description,
            creator_id: creator_id.to_string(),
            is_trivia: fields.is_trivia,
            topic: fields.topic,
            start_time,
            end_time,
            duration: fields.duration,
            positive_mark: fields.positive_mark,
            negative_mark: fields.negative_mark,
            navigation_type: fields.navigation_type,
            tab_switch_exit: fields.tab_switch_exit,
            difficulty: fields.difficulty,
            popularity: 0,
            is_active: true,
            created_at: schedule::now_ist(),
        }
    }
}
