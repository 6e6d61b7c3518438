use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;
use crate::types::{Editable, Resource};
use crate::types::request::{FlashcardChanges, NewFlashcard};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Flashcard {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) question: String,
    pub(crate) answer: String,
    pub(crate) tags: Vec<String>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) study_module_id: Option<Uuid>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Editable for Flashcard {
    type New = NewFlashcard;
    type Changes = FlashcardChanges;

    fn create(user_id: Uuid, params: NewFlashcard) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            question: params.question,
            answer: params.answer,
            tags: params.tags.unwrap_or_default(),
            difficulty: params.difficulty,
            study_module_id: params.study_module_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: FlashcardChanges) {
        if let Some(question) = changes.question {
            self.question = question;
        }
        if let Some(answer) = changes.answer {
            self.answer = answer;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        if changes.difficulty.is_some() {
            self.difficulty = changes.difficulty;
        }
        if changes.study_module_id.is_some() {
            self.study_module_id = changes.study_module_id;
        }

        self.updated_at = Utc::now();
    }
}

impl Document for Flashcard {
    const COLLECTION: &'static str = "flashcards";
    const RESOURCE: Resource = Resource::Flashcard;

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Uuid {
        self.user_id
    }
}
