use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;
use crate::types::{Editable, Resource};
use crate::types::request::{NewNotice, NoticeChanges};

/// An announcement published by an administrator and readable by everyone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Notice {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Editable for Notice {
    type New = NewNotice;
    type Changes = NoticeChanges;

    fn create(user_id: Uuid, params: NewNotice) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            title: params.title,
            content: params.content,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: NoticeChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }

        self.updated_at = Utc::now();
    }
}

impl Document for Notice {
    const COLLECTION: &'static str = "notices";
    const RESOURCE: Resource = Resource::Notice;

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Uuid {
        self.user_id
    }
}
