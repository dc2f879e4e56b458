//! Fetch layer for the football-data.org v4 REST API.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::http;
use crate::model::{Match, MatchesResponse};

const BASE_URL: &str = "https://api.football-data.org/v4";
const AUTH_HEADER: &str = "X-Auth-Token";

async fn get_matches(
    client: &reqwest::Client,
    token: &str,
    url: &str,
    query: &[(&str, String)],
) -> Result<Vec<Match>> {
    let data: MatchesResponse = http::get_json(client, url, query, AUTH_HEADER, token).await?;
    Ok(data.matches)
}

#[instrument(skip(client, token))]
pub(crate) async fn live_matches(client: &reqwest::Client, token: &str) -> Result<Vec<Match>> {
    let url = format!("{BASE_URL}/matches");
    let matches = get_matches(client, token, &url, &[("status", "LIVE".to_string())]).await?;
    debug!(count = matches.len(), "parsed live matches");
    Ok(matches)
}

#[instrument(skip(client, token))]
pub(crate) async fn matches_on(
    client: &reqwest::Client,
    token: &str,
    date: NaiveDate,
) -> Result<Vec<Match>> {
    let url = format!("{BASE_URL}/matches");
    let date = date.format("%Y-%m-%d").to_string();
    let matches = get_matches(client, token, &url, &[("date", date)]).await?;
    debug!(count = matches.len(), "parsed matches for date");
    Ok(matches)
}

#[instrument(skip(client, token))]
pub(crate) async fn match_details(
    client: &reqwest::Client,
    token: &str,
    id: u64,
) -> Result<Match> {
    let url = format!("{BASE_URL}/matches/{id}");
    http::get_json(client, &url, &[], AUTH_HEADER, token).await
}

#[instrument(skip(client, token))]
pub(crate) async fn competition_matches(
    client: &reqwest::Client,
    token: &str,
    code: &str,
) -> Result<Vec<Match>> {
    let url = format!("{BASE_URL}/competitions/{code}/matches");
    let matches = get_matches(client, token, &url, &[]).await?;
    debug!(count = matches.len(), code, "parsed competition matches");
    Ok(matches)
}
