//! Stage 1: resolve emails to Slack user IDs.

use crate::api::SlackClient;
use crate::error::Error;

/// Outcome of one lookup attempt. Resolutions map 1:1 onto the input emails,
/// in input order.
#[derive(Debug)]
pub struct Resolution {
    pub email: String,
    pub outcome: Result<String, Error>,
}

impl Resolution {
    pub fn user_id(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }
}

/// Look up every email, one call each. A failed lookup is recorded and the
/// remaining emails are still attempted; the caller decides whether the
/// surviving set is enough to continue.
pub async fn resolve_all(client: &SlackClient, emails: &[String]) -> Vec<Resolution> {
    let mut resolutions = Vec::with_capacity(emails.len());
    for email in emails {
        let outcome = client
            .lookup_user_by_email(email)
            .await
            .map(|user| user.id)
            .map_err(|cause| Error::LookupFailed {
                email: email.clone(),
                cause,
            });
        resolutions.push(Resolution {
            email: email.clone(),
            outcome,
        });
    }
    resolutions
}
