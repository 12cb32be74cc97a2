//! The end-to-end run: resolve users, fetch the directory, mutate each
//! requested channel. Strictly sequential; no call is issued concurrently
//! with any other.

use crate::api::{ChannelVisibility, SlackClient};
use crate::directory;
use crate::error::Error;
use crate::mutator::{self, Action, ChannelOutcome};
use crate::resolver::{self, Resolution};

/// Everything that happened during one run, in input order.
#[derive(Debug)]
pub struct RunReport {
    pub resolutions: Vec<Resolution>,
    pub channels: Vec<(String, ChannelOutcome)>,
}

/// Drive the three stages. Progress lines go to stdout as the run advances,
/// mirroring what an operator watching the terminal expects.
///
/// Fatal errors: [`Error::NoUsersResolved`] when every lookup failed, and
/// [`Error::DirectoryFetchFailed`] when any channel page failed. Per-email
/// and per-channel failures are reported and the run continues.
pub async fn run(
    client: &SlackClient,
    emails: &[String],
    channel_names: &[String],
    action: Action,
    visibility: ChannelVisibility,
) -> Result<RunReport, Error> {
    println!("\nLooking up users ...");
    let resolutions = resolver::resolve_all(client, emails).await;
    let mut user_ids = Vec::new();
    for resolution in &resolutions {
        match &resolution.outcome {
            Ok(id) => {
                println!("Valid user (ID: {id}) found for '{}'", resolution.email);
                user_ids.push(id.clone());
            }
            Err(e) => println!("{e}"),
        }
    }
    if user_ids.is_empty() {
        return Err(Error::NoUsersResolved);
    }

    let dir = directory::fetch(client, visibility).await?;
    tracing::debug!(total = dir.len(), "channel directory populated");

    match action {
        Action::Add => println!("\nInviting users to channels ..."),
        Action::Remove => println!("\nRemoving users from channels ..."),
    }
    let mut channels = Vec::with_capacity(channel_names.len());
    for name in channel_names {
        let outcome = mutator::apply(client, &dir, name, &user_ids, action).await;
        match &outcome {
            ChannelOutcome::NotFound => println!("Channel '{name}' not found -- skipping"),
            ChannelOutcome::Mutated => match action {
                Action::Add => println!("Users invited to '{name}'"),
                Action::Remove => println!("Users removed from '{name}'"),
            },
            ChannelOutcome::Failed(e) => println!("{e}"),
        }
        channels.push((name.clone(), outcome));
    }

    Ok(RunReport {
        resolutions,
        channels,
    })
}
