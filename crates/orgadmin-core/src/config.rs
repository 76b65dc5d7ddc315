//! Identifier resolution for project-scoped operations.

use crate::Result;
use crate::error::ConfigurationError;

/// Environment variable supplying the default project ID.
pub const PROJECT_ID_ENV: &str = "OPENAI_PROJECT_ID";

/// Resolve a project ID: explicit flag, then environment, then error.
///
/// Empty values count as absent.
pub fn resolve_project_id(flag: Option<&str>, env: Option<&str>) -> Result<String> {
    [flag, env]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigurationError::MissingProjectId { env: PROJECT_ID_ENV }.into())
}

/// [`resolve_project_id`] against the process environment.
pub fn resolve_project_id_from_env(flag: Option<&str>) -> Result<String> {
    let env = std::env::var(PROJECT_ID_ENV).ok();
    resolve_project_id(flag, env.as_deref())
}
