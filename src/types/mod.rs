pub(crate) mod chronogram;
pub(crate) mod flashcard;
pub(crate) mod notice;
pub(crate) mod request;
pub(crate) mod response;
pub(crate) mod study_module;
pub(crate) mod user;

use std::fmt::Display;

use uuid::Uuid;

use crate::store::Document;

/// Every stored resource kind, used to word not-found responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    User,
    Flashcard,
    Chronogram,
    StudyModule,
    Notice,
}

impl Resource {
    pub(crate) fn not_found_message(&self) -> &'static str {
        match self {
            Resource::User => "Usuário não encontrado.",
            Resource::Flashcard => "Flashcard não encontrado.",
            Resource::Chronogram => "Cronograma não encontrado.",
            Resource::StudyModule => "Módulo de estudo não encontrado.",
            Resource::Notice => "Aviso não encontrado.",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::User => "user",
            Resource::Flashcard => "flashcard",
            Resource::Chronogram => "chronogram",
            Resource::StudyModule => "study module",
            Resource::Notice => "notice",
        };

        f.write_str(name)
    }
}

/// A user-owned document built from a creation payload and edited in place.
pub(crate) trait Editable: Document {
    type New: Send;
    type Changes: Send;

    fn create(owner: Uuid, params: Self::New) -> Self;

    fn apply(&mut self, changes: Self::Changes);
}
