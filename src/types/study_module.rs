use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;
use crate::types::{Editable, Resource};
use crate::types::request::{NewResource, NewStudyModule, StudyModuleChanges};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Status {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct StudyResource {
    pub(crate) title: String,
    pub(crate) url: String,
}

impl From<NewResource> for StudyResource {
    fn from(resource: NewResource) -> Self {
        Self {
            title: resource.title,
            url: resource.url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudyModule {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) subject: Option<String>,
    pub(crate) status: Status,
    pub(crate) resources: Vec<StudyResource>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Editable for StudyModule {
    type New = NewStudyModule;
    type Changes = StudyModuleChanges;

    fn create(user_id: Uuid, params: NewStudyModule) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            title: params.title,
            description: params.description,
            subject: params.subject,
            status: params.status.unwrap_or_default(),
            resources: resources(params.resources),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: StudyModuleChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if changes.description.is_some() {
            self.description = changes.description;
        }
        if changes.subject.is_some() {
            self.subject = changes.subject;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if changes.resources.is_some() {
            self.resources = resources(changes.resources);
        }

        self.updated_at = Utc::now();
    }
}

fn resources(resources: Option<Vec<NewResource>>) -> Vec<StudyResource> {
    resources
        .unwrap_or_default()
        .into_iter()
        .map(StudyResource::from)
        .collect()
}

impl Document for StudyModule {
    const COLLECTION: &'static str = "study_modules";
    const RESOURCE: Resource = Resource::StudyModule;

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Uuid {
        self.user_id
    }
}
