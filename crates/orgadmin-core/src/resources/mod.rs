//! Resource families.
//!
//! Each family is a small descriptor implementing [`Resource`]: where its
//! collection lives, what a record looks like, and how a record projects
//! onto table columns. Families that issue secrets also implement
//! [`KeyResource`] for create and delete.

mod admin_keys;
mod organizations;
mod project_api_keys;
mod projects;

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::Serialize;

use crate::pagination::Identified;

pub use admin_keys::{AdminKey, AdminKeyOwner, AdminKeys};
pub use organizations::{Organization, Organizations};
pub use project_api_keys::{ProjectApiKey, ProjectApiKeys};
pub use projects::{Project, Projects};

/// A resource family exposed by a paginated list endpoint.
pub trait Resource: Send + Sync {
    /// Decoded record shape.
    type Record: DeserializeOwned + Identified + Send;

    /// Family name, used in logs.
    const NAME: &'static str;

    /// Table header.
    const COLUMNS: &'static [&'static str];

    /// Collection path relative to the API base, already escaped.
    fn collection_path(&self) -> String;

    /// Extra query parameters sent with every page request.
    fn list_query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Project a record onto [`Self::COLUMNS`].
    fn row(record: &Self::Record) -> Vec<String>;
}

/// A resource family whose members are secret keys that can be created and deleted.
pub trait KeyResource: Resource {
    /// Path of a single key.
    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection_path(), escape_segment(id))
    }
}

/// Request body for key creation.
#[derive(Debug, Serialize)]
pub struct CreateKeyRequest<'a> {
    pub name: &'a str,
}

/// Raw delete acknowledgment.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deleted: bool,
}

/// Delete acknowledgment with the identifier always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub id: String,
    pub deleted: bool,
}

impl DeleteResponse {
    /// Resolve the acknowledged ID, echoing `requested_id` when the server omits it.
    pub fn into_deleted(self, requested_id: &str) -> Deleted {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => requested_id.to_string(),
        };
        Deleted {
            id,
            deleted: self.deleted,
        }
    }
}

/// Percent-escape a single path segment.
pub fn escape_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Treat an explicit `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
