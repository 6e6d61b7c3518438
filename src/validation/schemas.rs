//! Request schemas, one per payload variant.

use crate::types::request;
use crate::validation::{Field, Kind, Mode, Rule, Schema};

/// Payloads that are checked against a schema before they are deserialized.
pub(crate) trait Schematic {
    fn schema() -> &'static Schema;

    fn mode() -> Mode {
        Mode::FailFast
    }
}

const TEXT: Kind = Kind::String(&[Rule::MinLength(1)]);
const DATE: Kind = Kind::String(&[Rule::Date]);
const EMAIL: Kind = Kind::String(&[Rule::Email]);
const PASSWORD: Kind = Kind::String(&[Rule::MinLength(6)]);
const IDENTIFIER: Kind = Kind::String(&[Rule::Uuid]);
const DIFFICULTY: Kind = Kind::String(&[Rule::OneOf(&["easy", "medium", "hard"])]);
const STATUS: Kind = Kind::String(&[Rule::OneOf(&["not_started", "in_progress", "completed"])]);

static NEW_USER: Schema = Schema::new(&[
    Field::required("name", TEXT),
    Field::required("email", EMAIL),
    Field::required("password", PASSWORD),
]);

static USER_CHANGES: Schema = Schema::new(&[
    Field::optional("name", TEXT),
    Field::optional("email", EMAIL),
]);

static PASSWORD_CHANGE: Schema = Schema::new(&[
    Field::required("currentPassword", TEXT),
    Field::required("newPassword", PASSWORD),
]);

static LOGIN: Schema = Schema::new(&[
    Field::required("email", EMAIL),
    Field::required("password", TEXT),
]);

static NEW_FLASHCARD: Schema = Schema::new(&[
    Field::required("question", TEXT),
    Field::required("answer", TEXT),
    Field::optional("tags", Kind::StringArray),
    Field::optional("difficulty", DIFFICULTY),
    Field::optional("studyModuleId", IDENTIFIER),
]);

static NEW_FLASHCARDS: Schema = Schema::new(&[Field::required(
    "flashcards",
    Kind::ObjectArray(&NEW_FLASHCARD),
)]);

static FLASHCARD_CHANGES: Schema = Schema::new(&[
    Field::optional("question", TEXT),
    Field::optional("answer", TEXT),
    Field::optional("tags", Kind::StringArray),
    Field::optional("difficulty", DIFFICULTY),
    Field::optional("studyModuleId", IDENTIFIER),
]);

static ACTIVITY: Schema = Schema::new(&[
    Field::required("name", TEXT),
    Field::required("date", DATE),
    Field::optional("done", Kind::Boolean),
]);

static NEW_CHRONOGRAM: Schema = Schema::new(&[
    Field::required("title", TEXT),
    Field::optional("description", Kind::String(&[])),
    Field::required("startDate", DATE),
    Field::required("endDate", DATE),
    Field::optional("activities", Kind::ObjectArray(&ACTIVITY)),
]);

static CHRONOGRAM_CHANGES: Schema = Schema::new(&[
    Field::optional("title", TEXT),
    Field::optional("description", Kind::String(&[])),
    Field::optional("startDate", DATE),
    Field::optional("endDate", DATE),
    Field::optional("activities", Kind::ObjectArray(&ACTIVITY)),
]);

static RESOURCE: Schema = Schema::new(&[
    Field::required("title", TEXT),
    Field::required("url", Kind::String(&[Rule::Uri])),
]);

static NEW_STUDY_MODULE: Schema = Schema::new(&[
    Field::required("title", TEXT),
    Field::optional("description", Kind::String(&[])),
    Field::optional("subject", TEXT),
    Field::optional("status", STATUS),
    Field::optional("resources", Kind::ObjectArray(&RESOURCE)),
]);

static STUDY_MODULE_CHANGES: Schema = Schema::new(&[
    Field::optional("title", TEXT),
    Field::optional("description", Kind::String(&[])),
    Field::optional("subject", TEXT),
    Field::optional("status", STATUS),
    Field::optional("resources", Kind::ObjectArray(&RESOURCE)),
]);

static NEW_NOTICE: Schema = Schema::new(&[
    Field::required("title", TEXT),
    Field::required("content", TEXT),
]);

static NOTICE_CHANGES: Schema = Schema::new(&[
    Field::optional("title", TEXT),
    Field::optional("content", TEXT),
]);

macro_rules! schematic {
    ($($payload:ty => $schema:ident),+ $(,)?) => {
        $(
            impl Schematic for $payload {
                fn schema() -> &'static Schema {
                    &$schema
                }
            }
        )+
    };
}

schematic! {
    request::NewUser => NEW_USER,
    request::UserChanges => USER_CHANGES,
    request::UpdatePasswordData => PASSWORD_CHANGE,
    request::LoginData => LOGIN,
    request::NewFlashcard => NEW_FLASHCARD,
    request::FlashcardChanges => FLASHCARD_CHANGES,
    request::NewChronogram => NEW_CHRONOGRAM,
    request::ChronogramChanges => CHRONOGRAM_CHANGES,
    request::NewStudyModule => NEW_STUDY_MODULE,
    request::StudyModuleChanges => STUDY_MODULE_CHANGES,
    request::NewNotice => NEW_NOTICE,
    request::NoticeChanges => NOTICE_CHANGES,
}

// Bulk creation reports every broken card at once.
impl Schematic for request::NewFlashcards {
    fn schema() -> &'static Schema {
        &NEW_FLASHCARDS
    }

    fn mode() -> Mode {
        Mode::CollectAll
    }
}
