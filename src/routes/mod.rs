pub(crate) mod chronograms;
pub(crate) mod flashcards;
pub(crate) mod notices;
pub(crate) mod router;
pub(crate) mod sessions;
pub(crate) mod study_modules;
pub(crate) mod users;
