//! Organization projects.

use serde::Deserialize;

use super::{Resource, null_as_default};
use crate::pagination::Identified;
use crate::time::{format_epoch_seconds, format_epoch_seconds_opt};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(default)]
    pub archived_at: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `/organization/projects`
#[derive(Debug, Clone, Copy, Default)]
pub struct Projects {
    /// Also list archived projects.
    pub include_archived: bool,
}

impl Resource for Projects {
    type Record = Project;

    const NAME: &'static str = "projects";

    const COLUMNS: &'static [&'static str] =
        &["ID", "NAME", "STATUS", "CREATED_AT", "ARCHIVED_AT"];

    fn collection_path(&self) -> String {
        "/organization/projects".to_string()
    }

    fn list_query(&self) -> Vec<(String, String)> {
        vec![(
            "include_archived".to_string(),
            self.include_archived.to_string(),
        )]
    }

    fn row(project: &Project) -> Vec<String> {
        vec![
            project.id.clone(),
            project.name.clone(),
            project.status.clone(),
            format_epoch_seconds(project.created_at),
            format_epoch_seconds_opt(project.archived_at),
        ]
    }
}
