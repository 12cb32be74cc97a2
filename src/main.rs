//! slack-chanops: bulk-invite or remove users across Slack channels.
//!
//! The Slack Web API only takes opaque user and channel IDs for membership
//! operations, so the tool runs three steps:
//!
//!   1) look up each email with `users.lookupByEmail`
//!   2) page through `conversations.list` into a name -> ID map
//!   3) per channel, invite everyone in one call, or kick one user at a time
//!      (the API has no batch removal)

use anyhow::{bail, Result};
use clap::Parser;

use slack_chanops::api::{ChannelVisibility, SlackClient};
use slack_chanops::mutator::Action;
use slack_chanops::pipeline;

#[derive(Parser)]
#[command(
    name = "slack-chanops",
    about = "Bulk-invite or remove Slack users across channels"
)]
struct Args {
    /// Slack OAuth access token
    #[arg(long, env = "SLACK_API_TOKEN")]
    api_token: String,

    /// Comma-separated list of user emails
    #[arg(long)]
    emails: String,

    /// Comma-separated list of channel names
    #[arg(long)]
    channels: String,

    /// What to do with the users in each channel
    #[arg(long, value_enum, default_value = "add")]
    action: Action,

    /// Operate on private channels (requires groups:read and groups:write scopes)
    #[arg(long)]
    private: bool,

    /// Enable debug diagnostics (page sizes, per-user removal failures)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug {
        "slack_chanops=debug"
    } else {
        "slack_chanops=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let emails = split_list(&args.emails);
    let channel_names = split_list(&args.channels);
    if emails.is_empty() {
        bail!("--emails must name at least one address");
    }
    if channel_names.is_empty() {
        bail!("--channels must name at least one channel");
    }

    let visibility = if args.private {
        ChannelVisibility::Private
    } else {
        ChannelVisibility::Public
    };
    let client = SlackClient::new(args.api_token);

    pipeline::run(&client, &emails, &channel_names, args.action, visibility).await?;

    println!("\nAll done!");
    Ok(())
}

/// Split a comma-separated flag value, dropping empty segments so a stray
/// trailing comma does not turn into a lookup for "".
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
