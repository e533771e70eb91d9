//! Tests for the re-invite endpoint client.

use github_reinvite::{ReinviteClient, ReinviteError, ReinviteInput};
use serde_json::json;

use crate::common::{MockEndpoint, dead_endpoint};

fn input() -> ReinviteInput {
    ReinviteInput {
        owner: "18-341".into(),
        repo: "p3-noc-octocat".into(),
        username: "octocat".into(),
    }
}

#[tokio::test]
async fn test_posts_input_as_json() {
    let endpoint = MockEndpoint::json(json!({ "ok": true })).await;

    let result = endpoint.client().reinvite(input()).await.unwrap().unwrap();
    assert!(result.ok());

    assert_eq!(
        endpoint.received(),
        vec![json!({
            "owner": "18-341",
            "repo": "p3-noc-octocat",
            "username": "octocat"
        })]
    );
}

#[tokio::test]
async fn test_decodes_full_result() {
    let endpoint = MockEndpoint::json(json!({
        "ok": true,
        "input": { "owner": "18-341", "repo": "p3-noc-octocat", "username": "octocat" },
        "foundInvitations": [ { "id": 7, "invitee": { "login": "octocat" } }, { "id": 8 } ],
        "deletedInvitations": [ { "id": 7 } ],
        "invite": { "status": 201, "message": "Invitation created", "invitationId": 99 }
    }))
    .await;

    let result = endpoint.client().reinvite(input()).await.unwrap().unwrap();

    let found = result.found_invitations().unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(
        found[0].invitee.as_ref().and_then(|i| i.login.as_deref()),
        Some("octocat")
    );
    assert!(found[1].invitee.is_none());
    assert_eq!(result.deleted_invitations().unwrap()[0].id, Some(7));

    let invite = result.invite().unwrap();
    assert_eq!(invite.status, Some(201));
    assert_eq!(invite.invitation_id, Some(99));
    assert!(result.is_invited());
    assert_eq!(result.input(), Some(input()));
}

#[tokio::test]
async fn test_minimal_invite_counts_as_invited() {
    let endpoint = MockEndpoint::json(json!({ "ok": true, "invite": { "status": 201 } })).await;

    let result = endpoint.client().reinvite(input()).await.unwrap().unwrap();
    assert!(result.ok());
    assert!(result.is_invited());
    assert_eq!(result.invite().unwrap().message, None);
    assert!(result.found_invitations().is_none());
}

#[tokio::test]
async fn test_unknown_nested_fields_are_kept_for_display() {
    let body = json!({
        "ok": true,
        "foundInvitations": [{
            "id": 7,
            "invitee": { "login": "octocat", "html_url": "https://github.com/octocat" },
            "permissions": "write",
            "repository": { "full_name": "18-341/p3-noc-octocat" }
        }],
        "invite": { "status": 201, "message": "Invitation created", "html_url": "https://github.com/18-341/p3-noc-octocat/invitations" }
    });
    let endpoint = MockEndpoint::json(body.clone()).await;

    let result = endpoint.client().reinvite(input()).await.unwrap().unwrap();
    assert_eq!(result.raw(), &body);

    let shown = result.to_pretty_json();
    assert!(shown.contains("\"html_url\": \"https://github.com/octocat\""));
    assert!(shown.contains("\"permissions\": \"write\""));
    assert!(shown.contains("\"full_name\": \"18-341/p3-noc-octocat\""));
}

#[tokio::test]
async fn test_error_status_with_json_body_is_a_result() {
    let endpoint = MockEndpoint::start(
        500,
        json!({ "ok": false, "error": "Repository not found" }).to_string(),
    )
    .await;

    let result = endpoint.client().reinvite(input()).await.unwrap().unwrap();
    assert!(!result.ok());
    assert_eq!(result.error(), Some("Repository not found"));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let endpoint = MockEndpoint::start(502, "<html>Bad Gateway</html>").await;

    let err = endpoint.client().reinvite(input()).await.unwrap().unwrap_err();
    match err {
        ReinviteError::Decode { status, .. } => assert_eq!(status, 502),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    let client = ReinviteClient::new(dead_endpoint().await).unwrap();

    let err = client.reinvite(input()).await.unwrap().unwrap_err();
    assert!(matches!(err, ReinviteError::Http(_)));
    assert!(err.to_string().starts_with("Request failed"));
}

#[tokio::test]
async fn test_blank_field_is_rejected_without_request() {
    let endpoint = MockEndpoint::json(json!({ "ok": true })).await;
    let mut blank_repo = input();
    blank_repo.repo = String::new();

    let err = endpoint.client().reinvite(blank_repo).await.unwrap().unwrap_err();
    assert_eq!(err.to_string(), "Invalid input: repo must not be empty");
    assert!(endpoint.received().is_empty());
}
