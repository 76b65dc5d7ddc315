//! API keys scoped to a single project.

use serde::Deserialize;

use super::{KeyResource, Resource, escape_segment, null_as_default};
use crate::pagination::Identified;
use crate::time::{format_epoch_seconds, format_epoch_seconds_opt};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectApiKey {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub redacted_value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(default)]
    pub last_used_at: Option<i64>,
}

impl Identified for ProjectApiKey {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `/organization/projects/{project_id}/api_keys`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectApiKeys {
    project_id: String,
}

impl ProjectApiKeys {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}

impl Resource for ProjectApiKeys {
    type Record = ProjectApiKey;

    const NAME: &'static str = "project-api-keys";

    const COLUMNS: &'static [&'static str] =
        &["ID", "NAME", "CREATED_AT", "LAST_USED_AT", "REDACTED_VALUE"];

    fn collection_path(&self) -> String {
        format!(
            "/organization/projects/{}/api_keys",
            escape_segment(&self.project_id)
        )
    }

    fn row(key: &ProjectApiKey) -> Vec<String> {
        vec![
            key.id.clone(),
            key.name.clone(),
            format_epoch_seconds(key.created_at),
            format_epoch_seconds_opt(key.last_used_at),
            key.redacted_value.clone(),
        ]
    }
}

impl KeyResource for ProjectApiKeys {}
