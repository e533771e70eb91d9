//! Re-invite form state.
//!
//! Holds the selected assignment and username for one organization, derives
//! the student repository name, and drives a submission through
//! `Idle -> Loading -> Done`.

use crate::config::Organization;
use crate::reinvite::{ReinviteClient, ReinviteInput, ReinviteResult, repository_url};
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use thiserror::Error;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const REQUEST_FAILED: &str = "Request failed";

/// GitHub logins are at most 39 characters.
const MAX_USERNAME_LEN: usize = 39;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown assignment: {0}")]
    UnknownAssignment(String),
}

/// Where the form is in its request cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Done(ReinviteResult),
}

/// Repository name for `prefix` and `username`; empty unless both are set.
#[must_use]
pub fn repo_name(prefix: Option<&str>, username: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() && !username.is_empty() => {
            format!("{prefix}-{username}")
        }
        _ => String::new(),
    }
}

/// Whether `username` follows GitHub's login rules: alphanumerics separated
/// by single hyphens, no leading or trailing hyphen.
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref LOGIN_RE: Result<Regex, regex::Error> =
            Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$");
    }

    let Ok(re) = LOGIN_RE.as_ref() else {
        return false;
    };
    username.len() <= MAX_USERNAME_LEN && re.is_match(username)
}

/// The form for a single organization.
#[derive(Debug, Clone)]
pub struct ReinviteForm {
    organization: Organization,
    assignment: String,
    username: String,
    phase: FormPhase,
}

impl ReinviteForm {
    /// New form with the organization's default assignment selected.
    #[must_use]
    pub fn new(organization: Organization) -> Self {
        let assignment = organization.default_assignment().to_string();
        Self {
            organization,
            assignment,
            username: String::new(),
            phase: FormPhase::Idle,
        }
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn owner(&self) -> &str {
        &self.organization.owner
    }

    pub fn assignment(&self) -> &str {
        &self.assignment
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FormPhase::Loading)
    }

    /// Result of the last submission, if any
    pub fn result(&self) -> Option<&ReinviteResult> {
        match &self.phase {
            FormPhase::Done(result) => Some(result),
            _ => None,
        }
    }

    pub fn select_assignment(&mut self, title: &str) -> Result<(), FormError> {
        if !self.organization.has_assignment(title) {
            return Err(FormError::UnknownAssignment(title.to_string()));
        }
        self.assignment = title.to_string();
        Ok(())
    }

    pub fn set_username(&mut self, username: &str) {
        self.username = username.trim().to_string();
    }

    /// Prefix of the selected assignment
    pub fn prefix(&self) -> Option<&str> {
        self.organization.prefix_for(&self.assignment)
    }

    /// `{prefix}-{username}`, or empty while the username is blank.
    pub fn repo_name(&self) -> String {
        repo_name(self.prefix(), &self.username)
    }

    /// Request body for the current field values
    pub fn input(&self) -> ReinviteInput {
        ReinviteInput {
            owner: self.owner().to_string(),
            repo: self.repo_name(),
            username: self.username.clone(),
        }
    }

    /// Link to the student repository, shown only after a successful invite.
    pub fn repository_link(&self) -> Option<String> {
        self.result()
            .filter(|r| r.is_invited())
            .map(|_| repository_url(self.owner(), &self.repo_name()))
    }

    /// Finish with an error result without contacting the endpoint.
    pub fn fail(&mut self, message: impl Into<String>) -> ReinviteResult {
        let outcome = ReinviteResult::failure(message);
        self.phase = FormPhase::Done(outcome.clone());
        outcome
    }

    /// Check the fields; `Err` carries the message to show the user.
    fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() {
            return Err(USERNAME_REQUIRED.to_string());
        }
        if !is_valid_username(&self.username) {
            return Err(format!("Invalid GitHub username: {}", self.username));
        }
        if self.prefix().is_none() {
            return Err(format!("No repository configured for {}", self.assignment));
        }
        Ok(())
    }

    /// Submit the form through `client` and return the result to display.
    ///
    /// Validation failures and request errors become `ok: false` results; no
    /// request is made when validation fails.
    pub async fn submit(&mut self, client: &ReinviteClient) -> ReinviteResult {
        if let Err(message) = self.validate() {
            return self.fail(message);
        }

        self.phase = FormPhase::Loading;
        let input = self.input();
        info!(
            "Re-inviting {} to {}/{}",
            input.username, input.owner, input.repo
        );

        let outcome = match client.reinvite(input).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!("Re-invite request failed: {e}");
                ReinviteResult::failure(error_message(&e.to_string()))
            }
            Err(e) => {
                warn!("Re-invite task dropped: {e}");
                ReinviteResult::failure(error_message(&e.to_string()))
            }
        };

        if !outcome.ok() {
            warn!(
                "Re-invite for {} was rejected: {}",
                self.username,
                outcome.error().unwrap_or("no error message")
            );
        }

        self.phase = FormPhase::Done(outcome.clone());
        outcome
    }
}

fn error_message(message: &str) -> String {
    if message.trim().is_empty() {
        REQUEST_FAILED.to_string()
    } else {
        message.to_string()
    }
}
