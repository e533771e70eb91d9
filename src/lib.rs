//! `github_reinvite` - course repository re-invite form
//!
//! Students pick an assignment and enter their GitHub username; the form
//! derives the repository name `{prefix}-{username}` from a static catalog
//! and asks the re-invite endpoint to refresh the collaborator invitation.

pub mod config;
pub mod form;
pub mod page;
pub mod reinvite;
pub mod runtime;
pub mod server;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export configuration types
pub use config::{
    Assignment, Catalog, CatalogError, Cli, FALLBACK_ASSIGNMENT, Organization, Settings,
    SettingsError,
};

// Re-export endpoint client types
pub use reinvite::{
    DeletedInvitation, Invitation, Invitee, InviteResult, ReinviteClient, ReinviteClientBuilder,
    ReinviteError, ReinviteInput, ReinviteResult, repository_url,
};

// Re-export form types
pub use form::{FormError, FormPhase, ReinviteForm, repo_name};

// Re-export server entry points
pub use server::{AppState, router, serve};
