//! CLI integration tests against a mock administration API.
//!
//! Each test starts a wiremock server, points the binary at it through
//! `OPENAI_BASE_URL`, and checks what ends up on stdout and stderr.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{TEST_KEY, base_url, run_cli, run_cli_against, run_cli_success, table_rows};

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_organizations_list_walks_pages_with_id_fallback() {
    let server = MockServer::start().await;

    // First page omits last_id; the walk continues from the final record.
    Mock::given(method("GET"))
        .and(path("/v1/organizations"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"id": "org-a", "name": "alpha", "title": "Alpha", "role": "owner",
                 "is_default": true, "personal": false, "created": 1700000000, "description": "first"},
                {"id": "org-b", "name": "beta", "title": "Beta", "role": "reader",
                 "is_default": false, "personal": true, "created": 1700000000, "description": "second"}
            ],
            "has_more": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/organizations"))
        .and(query_param("after", "org-b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"id": "org-c", "name": "gamma", "title": "Gamma", "role": "owner",
                 "is_default": false, "personal": false, "created": 1700000000, "description": "third"}
            ],
            "last_id": "org-c",
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server, &["organizations", "list", "--limit", "2"]).await;
    let rows = table_rows(&stdout);

    assert_eq!(
        rows[0],
        ["DEFAULT", "ID", "NAME", "TITLE", "PERSONAL", "ROLE", "CREATED", "DESCRIPTION"]
    );
    assert_eq!(
        rows[1],
        ["true", "org-a", "alpha", "Alpha", "false", "owner", "2023-11-14T22:13:20Z", "first"]
    );
    let ids: Vec<&str> = rows[1..].iter().map(|r| r[1].as_str()).collect();
    assert_eq!(ids, ["org-a", "org-b", "org-c"]);
}

#[tokio::test]
async fn test_admin_keys_list_renders_owner_columns() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organization/admin_api_keys"))
        .and(header("authorization", format!("Bearer {TEST_KEY}").as_str()))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "object": "organization.admin_api_key",
                "id": "key_abc",
                "name": "primary",
                "redacted_value": "sk-admin...def",
                "created_at": 1711471533,
                "last_used_at": 1711471534,
                "owner": {"type": "user", "name": "ada", "role": "owner"}
            }],
            "first_id": "key_abc",
            "last_id": "key_abc",
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server, &["admin-keys", "list"]).await;
    let rows = table_rows(&stdout);

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[1],
        [
            "key_abc",
            "primary",
            "true",
            "2024-03-26T16:45:33Z",
            "2024-03-26T16:45:34Z",
            "user",
            "owner",
            "ada"
        ]
    );
}

#[tokio::test]
async fn test_projects_list_clamps_limit_and_sends_include_archived() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organization/projects"))
        .and(query_param("limit", "100"))
        .and(query_param("include_archived", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"id": "proj_old", "name": "old", "status": "archived",
                 "created_at": 1700000000, "archived_at": 1711471533}
            ],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server,
        &["projects", "list", "--include-archived", "--limit", "500"],
    )
    .await;

    assert!(stdout.starts_with("ID"));
    assert!(stdout.contains("proj_old"));
    assert!(stdout.contains("2024-03-26T16:45:33Z"));
}

#[tokio::test]
async fn test_empty_page_with_more_terminates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organization/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [],
            "last_id": "proj_x",
            "has_more": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server, &["projects", "list"]).await;

    assert_eq!(table_rows(&stdout).len(), 1);
}

#[tokio::test]
async fn test_list_failure_keeps_earlier_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organization/admin_api_keys"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "key_1", "name": "one", "created_at": 1711471533}],
            "last_id": "key_1",
            "has_more": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/organization/admin_api_keys"))
        .and(query_param("after", "key_1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "upstream exploded", "type": "server_error"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_against(&server, &["admin-keys", "list"]).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stdout.contains("key_1"));
    assert!(stderr.contains("upstream exploded"), "stderr: {stderr}");
}

// ============================================================================
// Project API keys
// ============================================================================

#[tokio::test]
async fn test_project_api_keys_list_uses_env_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organization/projects/proj_env/api_keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "id": "key_p1",
                "name": "svc",
                "redacted_value": "sk-proj...xyz",
                "created_at": 1711471533,
                "last_used_at": null
            }],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = base_url(&server);
    let output = run_cli(
        &["projects", "api-keys", "list"],
        &[
            ("OPENAI_BASE_URL", base.as_str()),
            ("OPENAI_ADMIN_KEY", TEST_KEY),
            ("OPENAI_PROJECT_ID", "proj_env"),
        ],
    )
    .await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("REDACTED_VALUE"));
    assert!(stdout.contains("sk-proj...xyz"));
}

#[tokio::test]
async fn test_project_flag_overrides_env() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/organization/projects/proj_flag/api_keys/key_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "organization.project.api_key.deleted",
            "id": "key_9",
            "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = base_url(&server);
    let output = run_cli(
        &["projects", "api-keys", "--project-id", "proj_flag", "delete", "key_9"],
        &[
            ("OPENAI_BASE_URL", base.as_str()),
            ("OPENAI_ADMIN_KEY", TEST_KEY),
            ("OPENAI_PROJECT_ID", "proj_env"),
        ],
    )
    .await;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "DELETED\ttrue\tkey_9\n");
}

#[tokio::test]
async fn test_missing_project_id_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli_against(&server, &["projects", "api-keys", "list"]).await;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("--project-id is required"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_project_api_key_create_prints_secret() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/organization/projects/proj_1/api_keys"))
        .and(body_json(json!({"name": "svc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "key_new",
            "name": "svc",
            "key": "sk-proj-issued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server,
        &["projects", "api-keys", "create", "--project-id", "proj_1", "--name", "svc"],
    )
    .await;

    assert_eq!(stdout, "sk-proj-issued\n");
}

// ============================================================================
// Admin key create / delete
// ============================================================================

#[tokio::test]
async fn test_admin_key_create_prints_only_secret() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/organization/admin_api_keys"))
        .and(body_json(json!({"name": "deploy"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "organization.admin_api_key",
            "id": "key_new",
            "name": "deploy",
            "redacted_value": "sk-admin...cdef",
            "created_at": 1711471533,
            "value": "sk-admin-0123456789abcdef",
            "api_key": "sk-legacy"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server, &["admin-keys", "create", "--name", "deploy"]).await;

    assert_eq!(stdout, "sk-admin-0123456789abcdef\n");
}

#[tokio::test]
async fn test_admin_key_create_without_secret_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/organization/admin_api_keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "key_new",
            "name": "deploy"
        })))
        .mount(&server)
        .await;

    let output = run_cli_against(&server, &["admin-keys", "create", "--name", "deploy"]).await;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("did not include a key value"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_admin_key_create_requires_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli_against(&server, &["admin-keys", "create"]).await;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("--name is required"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_admin_key_delete_echoes_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/organization/admin_api_keys/key_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "organization.admin_api_key.deleted",
            "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server, &["admin-keys", "delete", "key_abc"]).await;

    assert_eq!(stdout, "DELETED\ttrue\tkey_abc\n");
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_missing_api_key_fails() {
    let server = MockServer::start().await;
    let base = base_url(&server);

    let output = run_cli(
        &["organizations", "list"],
        &[("OPENAI_BASE_URL", base.as_str())],
    )
    .await;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("API key is required"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_api_key_falls_back_to_openai_api_key_env() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organizations"))
        .and(header("authorization", "Bearer sk-from-api-key-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = base_url(&server);
    let output = run_cli(
        &["organizations", "list"],
        &[
            ("OPENAI_BASE_URL", base.as_str()),
            ("OPENAI_API_KEY", "sk-from-api-key-env"),
        ],
    )
    .await;

    assert!(output.status.success());
}

#[tokio::test]
async fn test_api_key_flag_overrides_env() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/organizations"))
        .and(header("authorization", "Bearer sk-from-flag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = base_url(&server);
    let output = run_cli(
        &["organizations", "list", "--api-key", "sk-from-flag"],
        &[
            ("OPENAI_BASE_URL", base.as_str()),
            ("OPENAI_ADMIN_KEY", TEST_KEY),
            ("OPENAI_API_KEY", "sk-from-api-key-env"),
        ],
    )
    .await;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
