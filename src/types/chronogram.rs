use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;
use crate::types::{Editable, Resource};
use crate::types::request::{ChronogramChanges, NewActivity, NewChronogram};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Activity {
    pub(crate) name: String,
    pub(crate) date: String,
    pub(crate) done: bool,
}

impl From<NewActivity> for Activity {
    fn from(activity: NewActivity) -> Self {
        Self {
            name: activity.name,
            date: activity.date,
            done: activity.done.unwrap_or(false),
        }
    }
}

/// A study schedule between two dates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Chronogram {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) activities: Vec<Activity>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Editable for Chronogram {
    type New = NewChronogram;
    type Changes = ChronogramChanges;

    fn create(user_id: Uuid, params: NewChronogram) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            title: params.title,
            description: params.description,
            start_date: params.start_date,
            end_date: params.end_date,
            activities: activities(params.activities),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: ChronogramChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if changes.description.is_some() {
            self.description = changes.description;
        }
        if let Some(start_date) = changes.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            self.end_date = end_date;
        }
        if changes.activities.is_some() {
            self.activities = activities(changes.activities);
        }

        self.updated_at = Utc::now();
    }
}

fn activities(activities: Option<Vec<NewActivity>>) -> Vec<Activity> {
    activities
        .unwrap_or_default()
        .into_iter()
        .map(Activity::from)
        .collect()
}

impl Document for Chronogram {
    const COLLECTION: &'static str = "chronograms";
    const RESOURCE: Resource = Resource::Chronogram;

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Uuid {
        self.user_id
    }
}
