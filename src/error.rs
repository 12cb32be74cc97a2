//! Error taxonomy, tagged by pipeline stage.

use reqwest::StatusCode;

/// A single remote call gone wrong, independent of which stage made it.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response; the raw body is kept so it reaches the diagnostics.
    #[error("non-success status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// HTTP succeeded but Slack said `ok: false`.
    #[error("slack error: {0}")]
    Api(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-fatal: logged per email, resolution continues.
    #[error("user lookup failed for {email}: {cause}")]
    LookupFailed { email: String, cause: CallError },
    /// Fatal: a partial directory would produce false "not found" results.
    #[error("channel listing failed: {cause}")]
    DirectoryFetchFailed { cause: CallError },
    /// Non-fatal: logged per channel, the next channel is still processed.
    #[error("membership change failed for '{channel}': {cause}")]
    MutationFailed { channel: String, cause: CallError },
    /// Fatal: every lookup failed, so there is nothing to invite or remove.
    #[error("no users resolved - aborting")]
    NoUsersResolved,
}
