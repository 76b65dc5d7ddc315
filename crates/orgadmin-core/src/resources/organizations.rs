//! Organizations visible to the caller.

use serde::Deserialize;

use super::{Resource, null_as_default};
use crate::pagination::Identified;
use crate::time::format_epoch_seconds;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Organization {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_default: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_scim_managed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub parent_org_id: Option<String>,
}

impl Identified for Organization {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `/organizations`
#[derive(Debug, Clone, Copy, Default)]
pub struct Organizations;

impl Resource for Organizations {
    type Record = Organization;

    const NAME: &'static str = "organizations";

    const COLUMNS: &'static [&'static str] = &[
        "DEFAULT",
        "ID",
        "NAME",
        "TITLE",
        "PERSONAL",
        "ROLE",
        "CREATED",
        "DESCRIPTION",
    ];

    fn collection_path(&self) -> String {
        "/organizations".to_string()
    }

    fn row(org: &Organization) -> Vec<String> {
        vec![
            org.is_default.to_string(),
            org.id.clone(),
            org.name.clone(),
            org.title.clone(),
            org.personal.to_string(),
            org.role.clone(),
            format_epoch_seconds(org.created),
            org.description.clone(),
        ]
    }
}
