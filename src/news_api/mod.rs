//! Fetch layer for NewsAPI: general football headlines and per-team
//! searches used by the favorite-team news check.

use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::http;
use crate::model::{NewsArticle, NewsResponse};

const BASE_URL: &str = "https://newsapi.org/v2";
const AUTH_HEADER: &str = "X-Api-Key";

#[instrument(skip(client, token))]
pub(crate) async fn top_headlines(
    client: &reqwest::Client,
    token: &str,
    page_size: u8,
) -> Result<Vec<NewsArticle>> {
    let url = format!("{BASE_URL}/top-headlines");
    let query = [
        ("category", "sports".to_string()),
        ("q", "football".to_string()),
        ("pageSize", page_size.to_string()),
    ];
    let data: NewsResponse = http::get_json(client, &url, &query, AUTH_HEADER, token).await?;
    let articles = data
        .articles
        .into_iter()
        .filter(NewsArticle::is_displayable)
        .collect_vec();
    debug!(count = articles.len(), "parsed headlines");
    Ok(articles)
}

#[instrument(skip(client, token))]
pub(crate) async fn team_news(
    client: &reqwest::Client,
    token: &str,
    team_name: &str,
    since: DateTime<Utc>,
    page_size: u8,
) -> Result<Vec<NewsArticle>> {
    let url = format!("{BASE_URL}/everything");
    let query = [
        ("q", format!("\"{team_name}\" football")),
        ("sortBy", "publishedAt".to_string()),
        ("from", since.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ("pageSize", page_size.to_string()),
    ];
    let data: NewsResponse = http::get_json(client, &url, &query, AUTH_HEADER, token).await?;
    let articles = data
        .articles
        .into_iter()
        .filter(NewsArticle::is_displayable)
        .collect_vec();
    debug!(count = articles.len(), team_name, "parsed team news");
    Ok(articles)
}
