//! Wire types exchanged with the re-invite endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Request body: which repository to re-invite which user to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReinviteInput {
    pub owner: String,
    pub repo: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invitee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A pending collaborator invitation the endpoint found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitee: Option<Invitee>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletedInvitation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of the new invitation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResult {
    /// HTTP status GitHub returned for the invite call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_id: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of the re-invite endpoint.
///
/// The JSON is kept exactly as received and shown back to the user
/// unchanged. The accessors read the known fields from it; a field with an
/// unexpected shape reads as absent instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReinviteResult {
    raw: Value,
}

impl ReinviteResult {
    /// Wrap a decoded response body.
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// A failed result carrying only an error message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::from_value(json!({ "ok": false, "error": message.into() }))
    }

    /// The response body as received
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// `ok` field; anything but `true` counts as failure.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.raw.get("ok").and_then(Value::as_bool).unwrap_or(false)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.raw.get("error").and_then(Value::as_str)
    }

    #[must_use]
    pub fn input(&self) -> Option<ReinviteInput> {
        self.field("input")
    }

    #[must_use]
    pub fn invite(&self) -> Option<InviteResult> {
        self.field("invite")
    }

    #[must_use]
    pub fn found_invitations(&self) -> Option<Vec<Invitation>> {
        self.field("foundInvitations")
    }

    #[must_use]
    pub fn deleted_invitations(&self) -> Option<Vec<DeletedInvitation>> {
        self.field("deletedInvitations")
    }

    fn field<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.raw.get(key).filter(|v| !v.is_null())?;
        serde_json::from_value(value.clone()).ok()
    }

    /// True when the endpoint succeeded and GitHub accepted the invitation
    /// (201 Created, or 204 when the user already has access).
    #[must_use]
    pub fn is_invited(&self) -> bool {
        let status = self
            .raw
            .get("invite")
            .and_then(|invite| invite.get("status"))
            .and_then(Value::as_u64);
        self.ok() && matches!(status, Some(201 | 204))
    }

    /// Two-space indented JSON, as displayed on the page.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

/// Browser URL of a repository.
#[must_use]
pub fn repository_url(owner: &str, repo: &str) -> String {
    format!(
        "https://github.com/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}
