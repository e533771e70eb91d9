//! Route handlers.

use axum::{
    Form, Json,
    extract::{Query, State},
    response::Html,
};
use serde::{Deserialize, Serialize};

use super::{AppState, error::ApiError};
use crate::form::{FormError, ReinviteForm};
use crate::page::{PageView, render_page};
use crate::reinvite::repository_url;

/// Fields posted by the page, also accepted as a query to prefill it.
#[derive(Debug, Default, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub assignment: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentEntry {
    pub title: String,
    pub repo_prefix: String,
}

#[derive(Debug, Serialize)]
pub struct AssignmentList {
    pub organization: String,
    pub owner: String,
    pub assignments: Vec<AssignmentEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoNameResponse {
    pub owner: String,
    pub repo_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Apply `fields` to a fresh form. `Err` carries the form (with the default
/// assignment kept) when the assignment is not in the catalog.
fn fill_form(
    state: &AppState,
    fields: &FormFields,
) -> Result<ReinviteForm, (ReinviteForm, FormError)> {
    let mut form = ReinviteForm::new(state.organization.as_ref().clone());
    if let Some(username) = fields.username.as_deref() {
        form.set_username(username);
    }
    match fields.assignment.as_deref().map(|t| form.select_assignment(t)) {
        Some(Err(e)) => Err((form, e)),
        _ => Ok(form),
    }
}

/// `GET /`
pub async fn show_form(
    State(state): State<AppState>,
    Query(fields): Query<FormFields>,
) -> Html<String> {
    let form = fill_form(&state, &fields).unwrap_or_else(|(form, e)| {
        log::debug!("{e}; keeping {}", form.assignment());
        form
    });
    Html(render_page(&PageView::from_form(&form)))
}

/// `POST /`
pub async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let form = match fill_form(&state, &fields) {
        Ok(mut form) => {
            form.submit(&state.client).await;
            form
        }
        Err((mut form, e)) => {
            log::warn!("Rejected submission: {e}");
            form.fail(e.to_string());
            form
        }
    };
    Html(render_page(&PageView::from_form(&form)))
}

/// `GET /api/assignments`
pub async fn list_assignments(State(state): State<AppState>) -> Json<AssignmentList> {
    let org = &state.organization;
    Json(AssignmentList {
        organization: org.name.clone(),
        owner: org.owner.clone(),
        assignments: org
            .assignments
            .iter()
            .map(|a| AssignmentEntry {
                title: a.title.clone(),
                repo_prefix: a.repo_prefix.clone(),
            })
            .collect(),
    })
}

/// `GET /api/repo-name`
pub async fn repo_name(
    State(state): State<AppState>,
    Query(fields): Query<FormFields>,
) -> Result<Json<RepoNameResponse>, ApiError> {
    let mut form = ReinviteForm::new(state.organization.as_ref().clone());
    if let Some(title) = fields.assignment.as_deref() {
        form.select_assignment(title)?;
    }
    form.set_username(fields.username.as_deref().unwrap_or_default());

    let repo_name = form.repo_name();
    let url = (!repo_name.is_empty()).then(|| repository_url(form.owner(), &repo_name));
    Ok(Json(RepoNameResponse {
        owner: form.owner().to_string(),
        repo_name,
        url,
    }))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
