//! Re-invite endpoint module
//!
//! Typed client for the external `/api/reinvite` endpoint, which finds,
//! deletes and re-creates the collaborator invitation on GitHub.

pub mod client;
pub mod error;
pub mod types;

pub(crate) mod request;

pub use client::{ReinviteClient, ReinviteClientBuilder};
pub use error::{ReinviteError, ReinviteResultOf};
pub use types::{
    DeletedInvitation, Invitation, Invitee, InviteResult, ReinviteInput, ReinviteResult,
    repository_url,
};
