//! Slack Web API client.
//!
//! Thin reqwest wrapper over the four endpoints this tool needs. Every Slack
//! response carries an `ok` flag, and `ok: false` is a logical failure even
//! when the HTTP status is 200. The base URL is injectable so tests can point
//! the client at a mock server.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CallError;

pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Page size for `conversations.list`.
pub const LIST_PAGE_LIMIT: u32 = 200;

/// Which class of channels to list. Slack treats the two as distinct types
/// and this tool never fetches both in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelVisibility {
    Public,
    Private,
}

impl ChannelVisibility {
    fn types_param(self) -> &'static str {
        match self {
            ChannelVisibility::Public => "public_channel",
            ChannelVisibility::Private => "private_channel",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct LookupByEmailResponse {
    ok: bool,
    user: Option<SlackUser>,
    #[serde(default)]
    error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: String,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    ok: bool,
    #[serde(default)]
    channels: Vec<Channel>,
    #[serde(default)]
    response_metadata: ResponseMetadata,
    #[serde(default)]
    error: String,
}

/// One page of the channel listing. An empty `next_cursor` means this was
/// the last page.
#[derive(Debug)]
pub struct ChannelPage {
    pub channels: Vec<Channel>,
    pub next_cursor: String,
}

#[derive(Debug, Serialize)]
struct InviteRequest<'a> {
    channel: &'a str,
    /// Comma-joined user IDs, in input order.
    users: String,
}

#[derive(Debug, Serialize)]
struct KickRequest<'a> {
    channel: &'a str,
    user: &'a str,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    ok: bool,
    #[serde(default)]
    error: String,
}

pub struct SlackClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl SlackClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Self {
        SlackClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// `users.lookupByEmail`: map an email to the account that owns it.
    pub async fn lookup_user_by_email(&self, email: &str) -> Result<SlackUser, CallError> {
        let resp = self
            .http
            .get(format!("{}/users.lookupByEmail", self.base_url))
            .query(&[("email", email)])
            .bearer_auth(&self.token)
            .send()
            .await?;
        let body: LookupByEmailResponse = Self::decode(resp).await?;
        if !body.ok {
            return Err(CallError::Api(api_error(body.error)));
        }
        body.user
            .ok_or_else(|| CallError::Api("response carried no user".to_string()))
    }

    /// One page of `conversations.list`. Pass an empty cursor for the first
    /// page; archived channels are always excluded.
    pub async fn list_channels(
        &self,
        cursor: &str,
        visibility: ChannelVisibility,
    ) -> Result<ChannelPage, CallError> {
        let limit = LIST_PAGE_LIMIT.to_string();
        let resp = self
            .http
            .get(format!("{}/conversations.list", self.base_url))
            .query(&[
                ("cursor", cursor),
                ("exclude_archived", "true"),
                ("limit", &limit),
                ("types", visibility.types_param()),
            ])
            .bearer_auth(&self.token)
            .send()
            .await?;
        let body: ChannelListResponse = Self::decode(resp).await?;
        if !body.ok {
            return Err(CallError::Api(api_error(body.error)));
        }
        Ok(ChannelPage {
            channels: body.channels,
            next_cursor: body.response_metadata.next_cursor,
        })
    }

    /// `conversations.invite`: one call invites every user in the batch.
    pub async fn invite_users(&self, channel_id: &str, user_ids: &[String]) -> Result<(), CallError> {
        let req = InviteRequest {
            channel: channel_id,
            users: user_ids.join(","),
        };
        self.post_ack("conversations.invite", &req).await
    }

    /// `conversations.kick`: Slack only removes one user per call.
    pub async fn kick_user(&self, channel_id: &str, user_id: &str) -> Result<(), CallError> {
        let req = KickRequest {
            channel: channel_id,
            user: user_id,
        };
        self.post_ack("conversations.kick", &req).await
    }

    async fn post_ack<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), CallError> {
        let resp = self
            .http
            .post(format!("{}/{endpoint}", self.base_url))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        let ack: AckResponse = Self::decode(resp).await?;
        if !ack.ok {
            return Err(CallError::Api(api_error(ack.error)));
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, CallError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CallError::Status { status, body });
        }
        Ok(resp.json::<T>().await?)
    }
}

fn api_error(error: String) -> String {
    if error.is_empty() {
        "unspecified error".to_string()
    } else {
        error
    }
}
