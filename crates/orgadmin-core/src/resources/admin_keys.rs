//! Organization admin API keys.

use serde::Deserialize;

use super::{KeyResource, Resource, null_as_default};
use crate::pagination::Identified;
use crate::secret::is_admin_variant;
use crate::time::{format_epoch_seconds, format_epoch_seconds_opt};

/// An organization admin API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdminKey {
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
    #[serde(default)]
    pub owner: Option<AdminKeyOwner>,
}

/// The user or service account that owns an admin key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdminKeyOwner {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

impl Identified for AdminKey {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `/organization/admin_api_keys`
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminKeys;

impl Resource for AdminKeys {
    type Record = AdminKey;

    const NAME: &'static str = "admin-keys";

    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "NAME",
        "IS_ADMIN",
        "CREATED_AT",
        "LAST_USED_AT",
        "OWNER_TYPE",
        "OWNER_ROLE",
        "OWNER_NAME",
    ];

    fn collection_path(&self) -> String {
        "/organization/admin_api_keys".to_string()
    }

    fn row(key: &AdminKey) -> Vec<String> {
        let owner = key.owner.clone().unwrap_or_default();
        vec![
            key.id.clone(),
            key.name.clone(),
            is_admin_variant(&key.redacted_value).to_string(),
            format_epoch_seconds(key.created_at),
            format_epoch_seconds_opt(key.last_used_at),
            owner.kind,
            owner.role,
            owner.name,
        ]
    }
}

impl KeyResource for AdminKeys {}
