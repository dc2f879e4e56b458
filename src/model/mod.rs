mod favorite;
mod matches;
mod news;

pub use favorite::*;
pub use matches::*;
pub use news::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Deserialize an instant leniently: an absent, null, or unparsable
/// timestamp becomes `None` instead of failing the whole document.
pub(crate) fn lenient_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<DateTime<Utc>>().ok()))
}
