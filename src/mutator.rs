//! Stage 3: per-channel membership mutation.

use std::collections::HashMap;

use crate::api::SlackClient;
use crate::error::{CallError, Error};

/// What to do with the users in each requested channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    Add,
    Remove,
}

/// Terminal state for one requested channel. Failures here never abort the
/// run; the caller reports them and moves on to the next channel.
#[derive(Debug)]
pub enum ChannelOutcome {
    /// Name missing from the directory; nothing was attempted.
    NotFound,
    /// The membership change was applied.
    Mutated,
    /// A remote call failed. For Remove this also means the remaining users
    /// for this channel were never attempted.
    Failed(Error),
}

/// Resolve one channel name against the directory and apply the action for
/// the given users.
pub async fn apply(
    client: &SlackClient,
    directory: &HashMap<String, String>,
    channel_name: &str,
    user_ids: &[String],
    action: Action,
) -> ChannelOutcome {
    let Some(channel_id) = directory.get(channel_name) else {
        return ChannelOutcome::NotFound;
    };
    let result = match action {
        Action::Add => client.invite_users(channel_id, user_ids).await,
        Action::Remove => remove_each(client, channel_id, user_ids).await,
    };
    match result {
        Ok(()) => ChannelOutcome::Mutated,
        Err(cause) => ChannelOutcome::Failed(Error::MutationFailed {
            channel: channel_name.to_string(),
            cause,
        }),
    }
}

/// Slack has no batch kick, so removal is one call per user, in input order.
/// The first failure stops the loop: a half-removed channel is surfaced
/// immediately instead of silently pressing on.
async fn remove_each(
    client: &SlackClient,
    channel_id: &str,
    user_ids: &[String],
) -> Result<(), CallError> {
    for user_id in user_ids {
        if let Err(cause) = client.kick_user(channel_id, user_id).await {
            tracing::debug!(user = %user_id, channel = %channel_id, error = %cause, "kick failed");
            return Err(cause);
        }
    }
    Ok(())
}
