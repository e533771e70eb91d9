//! Re-invite request operation.

use crate::reinvite::{
    error::ReinviteError,
    types::{ReinviteInput, ReinviteResult},
};
use crate::runtime::AsyncTask;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

/// POST `input` to the re-invite endpoint.
///
/// Any JSON body becomes a [`ReinviteResult`] whatever the HTTP status: the
/// endpoint reports its own failures as `{ "ok": false, "error": ... }`.
/// Only transport errors and bodies that are not JSON are errors here.
pub(crate) fn reinvite(
    http: Arc<Client>,
    endpoint: Arc<str>,
    input: ReinviteInput,
) -> AsyncTask<Result<ReinviteResult, ReinviteError>> {
    AsyncTask::spawn_async(async move {
        debug!(
            "POST {endpoint} owner={} repo={} username={}",
            input.owner, input.repo, input.username
        );

        let response = http.post(&*endpoint).json(&input).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let raw: Value = serde_json::from_slice(&body).map_err(|source| {
            warn!("Endpoint returned HTTP {status} with an undecodable body");
            ReinviteError::Decode {
                status: status.as_u16(),
                source,
            }
        })?;

        let result = ReinviteResult::from_value(raw);
        if !status.is_success() {
            debug!("Endpoint returned HTTP {status} ok={}", result.ok());
        }
        Ok(result)
    })
}
