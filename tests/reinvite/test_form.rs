//! Tests for form submission against a mock endpoint.

use github_reinvite::{FALLBACK_ASSIGNMENT, FormPhase, Organization, ReinviteClient, ReinviteForm};
use serde_json::json;

use crate::common::{MockEndpoint, course, dead_endpoint};

#[tokio::test]
async fn test_empty_username_is_not_sent() {
    let endpoint = MockEndpoint::json(json!({ "ok": true })).await;
    let mut form = ReinviteForm::new(course());

    let result = form.submit(&endpoint.client()).await;

    assert!(!result.ok());
    assert_eq!(result.error(), Some("Username is required"));
    assert!(endpoint.received().is_empty());
    assert_eq!(form.phase(), &FormPhase::Done(result));
}

#[tokio::test]
async fn test_invalid_username_is_not_sent() {
    let endpoint = MockEndpoint::json(json!({ "ok": true })).await;
    let mut form = ReinviteForm::new(course());
    form.set_username("octo cat");

    let result = form.submit(&endpoint.client()).await;

    assert_eq!(
        result.error(),
        Some("Invalid GitHub username: octo cat")
    );
    assert!(endpoint.received().is_empty());
}

#[tokio::test]
async fn test_submit_sends_derived_repo() {
    let endpoint = MockEndpoint::json(json!({
        "ok": true,
        "invite": { "status": 201, "message": "Invitation created", "invitationId": 12 }
    }))
    .await;
    let mut form = ReinviteForm::new(course());
    form.select_assignment("P3: NOC").unwrap();
    form.set_username("octocat");

    let result = form.submit(&endpoint.client()).await;

    assert!(result.ok());
    assert_eq!(
        endpoint.received(),
        vec![json!({ "owner": "18-341", "repo": "p3-noc-octocat", "username": "octocat" })]
    );
    assert_eq!(
        form.repository_link().as_deref(),
        Some("https://github.com/18-341/p3-noc-octocat")
    );
}

#[tokio::test]
async fn test_minimal_invite_shows_link() {
    let endpoint = MockEndpoint::json(json!({ "ok": true, "invite": { "status": 201 } })).await;
    let mut form = ReinviteForm::new(course());
    form.set_username("octocat");

    let result = form.submit(&endpoint.client()).await;

    assert!(result.ok());
    assert_eq!(
        form.repository_link().as_deref(),
        Some("https://github.com/18-341/p2-matrix-multiply-octocat")
    );
}

#[tokio::test]
async fn test_organization_without_assignments_is_not_sent() {
    let endpoint = MockEndpoint::json(json!({ "ok": true })).await;
    let empty = Organization {
        name: "empty-course".into(),
        owner: "empty-course".into(),
        assignments: vec![],
    };
    let mut form = ReinviteForm::new(empty);
    form.set_username("octocat");

    let result = form.submit(&endpoint.client()).await;

    assert!(!result.ok());
    assert_eq!(form.assignment(), FALLBACK_ASSIGNMENT);
    assert_eq!(
        result.error(),
        Some("No repository configured for 🧑‍💻Lab: Git Started - Your Profile")
    );
    assert!(endpoint.received().is_empty());
    assert!(form.repository_link().is_none());
}

#[tokio::test]
async fn test_no_link_without_new_invitation() {
    let endpoint = MockEndpoint::json(json!({
        "ok": true,
        "invite": { "status": 422, "message": "Validation Failed" }
    }))
    .await;
    let mut form = ReinviteForm::new(course());
    form.set_username("octocat");

    let result = form.submit(&endpoint.client()).await;

    assert!(result.ok());
    assert!(form.repository_link().is_none());
}

#[tokio::test]
async fn test_request_failure_becomes_error_result() {
    let client = ReinviteClient::new(dead_endpoint().await).unwrap();
    let mut form = ReinviteForm::new(course());
    form.set_username("octocat");

    let result = form.submit(&client).await;

    assert!(!result.ok());
    assert!(result.error().unwrap().starts_with("Request failed"));
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_resubmit_replaces_previous_result() {
    let endpoint = MockEndpoint::json(json!({ "ok": true })).await;
    let mut form = ReinviteForm::new(course());

    let first = form.submit(&endpoint.client()).await;
    assert!(!first.ok());

    form.set_username("octocat");
    let second = form.submit(&endpoint.client()).await;
    assert!(second.ok());
    assert_eq!(form.result(), Some(&second));
}
