use serde::Deserialize;
use uuid::Uuid;

use crate::types::flashcard::Difficulty;
use crate::types::study_module::Status;

#[derive(Debug, Deserialize)]
pub(crate) struct NewUser {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserChanges {
    pub(crate) name: Option<String>,
    pub(crate) email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePasswordData {
    pub(crate) current_password: String,
    pub(crate) new_password: String,
}

#[derive(Deserialize)]
pub(crate) struct LoginData {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewFlashcard {
    pub(crate) question: String,
    pub(crate) answer: String,
    pub(crate) tags: Option<Vec<String>>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) study_module_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewFlashcards {
    pub(crate) flashcards: Vec<NewFlashcard>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlashcardChanges {
    pub(crate) question: Option<String>,
    pub(crate) answer: Option<String>,
    pub(crate) tags: Option<Vec<String>>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) study_module_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewActivity {
    pub(crate) name: String,
    pub(crate) date: String,
    pub(crate) done: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewChronogram {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) activities: Option<Vec<NewActivity>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChronogramChanges {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) start_date: Option<String>,
    pub(crate) end_date: Option<String>,
    pub(crate) activities: Option<Vec<NewActivity>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewResource {
    pub(crate) title: String,
    pub(crate) url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewStudyModule {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) subject: Option<String>,
    pub(crate) status: Option<Status>,
    pub(crate) resources: Option<Vec<NewResource>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudyModuleChanges {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) subject: Option<String>,
    pub(crate) status: Option<Status>,
    pub(crate) resources: Option<Vec<NewResource>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewNotice {
    pub(crate) title: String,
    pub(crate) content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoticeChanges {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}
