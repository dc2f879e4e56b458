use chrono::{DateTime, NaiveDate, Utc};
use tracing::instrument;

use crate::error::Result;
use crate::football_data;
use crate::model::{Match, NewsArticle};
use crate::news_api;

/// Client for the football-data.org v4 API.
///
/// Wraps a [`reqwest::Client`] plus an API token and exposes the match
/// feeds the app renders: live scores, daily schedules, match details, and
/// competition fixtures.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> goalflow::Result<()> {
/// use goalflow::FootballDataClient;
///
/// let client = FootballDataClient::new("my-token");
/// let live = client.live_matches().await?;
/// println!("{} matches in play", live.len());
/// # Ok(())
/// # }
/// ```
pub struct FootballDataClient {
    http: reqwest::Client,
    token: String,
}

impl FootballDataClient {
    /// Create a new client with default HTTP settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), token)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            http: client,
            token: token.into(),
        }
    }

    /// Fetch all matches currently in play.
    #[instrument(skip(self))]
    pub async fn live_matches(&self) -> Result<Vec<Match>> {
        football_data::live_matches(&self.http, &self.token).await
    }

    /// Fetch the schedule for a calendar date. Pass today's local date for
    /// the "today" screen; the clock stays with the caller.
    #[instrument(skip(self))]
    pub async fn matches_on(&self, date: NaiveDate) -> Result<Vec<Match>> {
        football_data::matches_on(&self.http, &self.token, date).await
    }

    /// Fetch full details for one match by ID.
    #[instrument(skip(self))]
    pub async fn match_details(&self, id: u64) -> Result<Match> {
        football_data::match_details(&self.http, &self.token, id).await
    }

    /// Fetch all matches of a competition by its code (e.g. `PL`, `CL`).
    #[instrument(skip(self))]
    pub async fn competition_matches(&self, code: &str) -> Result<Vec<Match>> {
        football_data::competition_matches(&self.http, &self.token, code).await
    }
}

/// Client for NewsAPI.
///
/// Provides the general football headline feed and the per-team search the
/// favorite-team notification check runs every few hours. Tombstoned or
/// bodyless articles are filtered out before they reach the caller.
pub struct NewsClient {
    http: reqwest::Client,
    token: String,
}

impl NewsClient {
    /// Create a new client with default HTTP settings.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), token)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            http: client,
            token: token.into(),
        }
    }

    /// Fetch the latest football headlines.
    #[instrument(skip(self))]
    pub async fn top_headlines(&self, page_size: u8) -> Result<Vec<NewsArticle>> {
        news_api::top_headlines(&self.http, &self.token, page_size).await
    }

    /// Search recent articles mentioning a team, newest first. `since`
    /// bounds how far back the search reaches.
    #[instrument(skip(self))]
    pub async fn team_news(
        &self,
        team_name: &str,
        since: DateTime<Utc>,
        page_size: u8,
    ) -> Result<Vec<NewsArticle>> {
        news_api::team_news(&self.http, &self.token, team_name, since, page_size).await
    }
}
