//! Stage 2: the channel directory.
//!
//! Pages through `conversations.list` and builds a name to ID map for one
//! visibility class. The map must be complete before any membership change
//! is evaluated, so a failure on any page aborts the whole fetch rather than
//! returning a partial directory.

use std::collections::HashMap;

use crate::api::{ChannelVisibility, SlackClient};
use crate::error::Error;

/// Fetch every non-archived channel of the given visibility class.
///
/// Cursor pagination: an empty `next_cursor` ends the loop, even when the
/// final page is full. Duplicate names are possible on Slack (uniqueness is
/// only enforced among non-archived channels of one type); the later page
/// wins, which matches whatever the platform itself would resolve last.
pub async fn fetch(
    client: &SlackClient,
    visibility: ChannelVisibility,
) -> Result<HashMap<String, String>, Error> {
    let mut by_name = HashMap::new();
    let mut cursor = String::new();
    loop {
        let page = client
            .list_channels(&cursor, visibility)
            .await
            .map_err(|cause| Error::DirectoryFetchFailed { cause })?;
        tracing::debug!(channels = page.channels.len(), "channel page fetched");
        for channel in page.channels {
            by_name.insert(channel.name, channel.id);
        }
        if page.next_cursor.is_empty() {
            break;
        }
        cursor = page.next_cursor;
    }
    Ok(by_name)
}
