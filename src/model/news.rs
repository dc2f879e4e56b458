use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient_instant;

/// Response envelope from the NewsAPI endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

/// The outlet that published an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A single news article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub source: NewsSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_instant")]
    pub published_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
}

impl NewsArticle {
    /// NewsAPI tombstones deleted articles as `[Removed]` with no body;
    /// those and articles without a description are not worth rendering.
    pub fn is_displayable(&self) -> bool {
        matches!(&self.title, Some(t) if !t.is_empty() && t != "[Removed]")
            && self.description.is_some()
    }
}
