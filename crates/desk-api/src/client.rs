use crate::config::DeskConfig;
use crate::error::{ApiError, Result};
use crate::tokens::TokenStore;
use desk_proto::{
    AnalyticsSummary, Comment, Me, NewComment, NewTicket, StatusPatch, Ticket, TicketStatus,
    TokenPair,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// REST client for the Supportdesk backend.
///
/// Each method maps to exactly one endpoint; the caller owns all retry and
/// refresh policy (there is none by design).
pub struct DeskApi {
    client: Client,
    config: DeskConfig,
    tokens: TokenStore,
}

impl DeskApi {
    /// Create a client with the keychain-backed token store.
    pub fn new(config: DeskConfig) -> Result<Self> {
        Self::with_token_store(config, TokenStore::keychain())
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(DeskConfig::from_env())
    }

    /// Create a client with an explicit token store.
    pub fn with_token_store(config: DeskConfig, tokens: TokenStore) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.base_url, path)
    }

    /// Attach the bearer access token, when one is stored.
    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.access() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map non-success statuses into the error taxonomy. 401 means the
    /// credentials are bad or expired; everything else is a generic API
    /// failure carrying the body for the log.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Auth(body))
        } else {
            Err(ApiError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// `POST /auth/register/` - create an account.
    pub async fn register(&self, username: &str, password: &str) -> Result<Me> {
        info!("Registering user {}", username);

        let response = self
            .client
            .post(self.url("/auth/register/"))
            .json(&Credentials { username, password })
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `POST /auth/token/` - exchange credentials for a token pair and
    /// persist it. Does not touch the Session; callers follow up with
    /// [`crate::session::refresh_session`].
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        info!("Logging in as {}", username);

        let response = self
            .client
            .post(self.url("/auth/token/"))
            .json(&Credentials { username, password })
            .send()
            .await?;

        let pair: TokenPair = Self::check(response).await?.json().await?;
        self.tokens.save(&pair)?;
        debug!("Token pair stored");
        Ok(())
    }

    /// `GET /auth/me/` - current identity, 401 when not logged in.
    pub async fn me(&self) -> Result<Me> {
        let response = self
            .authed(self.client.get(self.url("/auth/me/")))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET /tickets/` - all tickets visible to the current user.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        debug!("Fetching ticket list");

        let response = self
            .authed(self.client.get(self.url("/tickets/")))
            .send()
            .await?;

        let tickets: Vec<Ticket> = Self::check(response).await?.json().await?;
        debug!("Fetched {} tickets", tickets.len());
        Ok(tickets)
    }

    /// `GET /tickets/{id}/` - a single ticket.
    pub async fn get_ticket(&self, id: i64) -> Result<Ticket> {
        debug!("Fetching ticket {}", id);

        let response = self
            .authed(self.client.get(self.url(&format!("/tickets/{id}/"))))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `POST /tickets/` - create a ticket. AI triage fields populate
    /// asynchronously on the server; re-fetch to see them.
    pub async fn create_ticket(&self, title: &str, description: &str) -> Result<Ticket> {
        info!("Creating ticket: {}", title);

        let body = NewTicket {
            title: title.to_string(),
            description: description.to_string(),
        };
        let response = self
            .authed(self.client.post(self.url("/tickets/")))
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `PATCH /tickets/{id}/` - update the status (staff action).
    pub async fn update_status(&self, id: i64, status: TicketStatus) -> Result<Ticket> {
        info!("Updating ticket {} to {}", id, status.as_str());

        let response = self
            .authed(self.client.patch(self.url(&format!("/tickets/{id}/"))))
            .json(&StatusPatch { status })
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET /comments/?ticket={id}` - comments for one ticket.
    pub async fn list_comments(&self, ticket_id: i64) -> Result<Vec<Comment>> {
        debug!("Fetching comments for ticket {}", ticket_id);

        let response = self
            .authed(self.client.get(self.url("/comments/")))
            .query(&[("ticket", ticket_id)])
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `POST /comments/` - append a comment.
    pub async fn create_comment(&self, ticket_id: i64, message: &str) -> Result<Comment> {
        info!("Adding comment to ticket {}", ticket_id);

        let body = NewComment {
            ticket: ticket_id,
            message: message.to_string(),
        };
        let response = self
            .authed(self.client.post(self.url("/comments/")))
            .json(&body)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET /analytics/summary/` - pre-aggregated dashboard snapshot
    /// (staff only on the server side).
    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary> {
        debug!("Fetching analytics summary");

        let response = self
            .authed(self.client.get(self.url("/analytics/summary/")))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }
}
