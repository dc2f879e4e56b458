use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{GoalflowError, Result};

/// Fetch a URL and decode the JSON response body.
///
/// Maps the status codes both upstream APIs use for quota and auth failures
/// to their own error variants so callers can surface actionable messages.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
    auth_header: &str,
    token: &str,
) -> Result<T> {
    debug!(url, "fetching");

    let response = client
        .get(url)
        .query(query)
        .header(auth_header, token)
        .send()
        .await
        .map_err(|e| GoalflowError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    match status.as_u16() {
        429 => {
            return Err(GoalflowError::RateLimited {
                url: url.to_owned(),
            })
        }
        401 | 403 => {
            return Err(GoalflowError::Forbidden {
                url: url.to_owned(),
            })
        }
        404 => {
            return Err(GoalflowError::NotFound {
                url: url.to_owned(),
            })
        }
        _ if !status.is_success() => {
            return Err(GoalflowError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            })
        }
        _ => {}
    }

    response.json::<T>().await.map_err(|e| GoalflowError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
