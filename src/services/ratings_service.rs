use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;

use super::mean;
use crate::configuration::{LocalRatingMode, RatingsSettings};

/// `Source` label of the Rotten Tomatoes entry in an OMDb `Ratings` list.
pub const ROTTEN_TOMATOES_SOURCE: &str = "Rotten Tomatoes";

/// The two rating lookups a detail view is enriched with.
///
/// Implementations never fail: transport errors, bad statuses and unexpected
/// payloads all come back as `None`.
#[async_trait]
pub trait RatingsProvider: Send + Sync {
    async fn fetch_local_rating(&self, imdb_id: Option<&str>, movie_id: Option<i64>) -> Option<f64>;

    async fn fetch_rotten_tomatoes(&self, imdb_id: Option<&str>) -> Option<f64>;
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum LocalRatingPayload {
    Rows(Vec<LocalRatingRow>),
    Summary(LocalRatingSummary),
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum LocalRatingRow {
    Scored {
        rating: Option<Value>,
        score: Option<Value>,
    },
    #[allow(dead_code)]
    Other(IgnoredAny),
}

#[derive(Deserialize, Debug)]
struct LocalRatingSummary {
    average: Option<Value>,
    rating: Option<Value>,
    score: Option<Value>,
}

impl LocalRatingRow {
    fn value(&self) -> Option<f64> {
        match self {
            LocalRatingRow::Scored { rating, score } => first_number(&[rating, score]),
            LocalRatingRow::Other(_) => None,
        }
    }
}

impl LocalRatingPayload {
    fn value(&self) -> Option<f64> {
        match self {
            LocalRatingPayload::Rows(rows) => {
                let values: Vec<f64> = rows.iter().filter_map(LocalRatingRow::value).collect();
                mean(&values)
            }
            LocalRatingPayload::Summary(summary) => {
                first_number(&[&summary.average, &summary.rating, &summary.score])
            }
        }
    }
}

#[derive(Deserialize, Debug)]
struct OmdbTitle {
    #[serde(rename = "Ratings")]
    ratings: Option<Vec<OmdbRatingEntry>>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum OmdbRatingEntry {
    Rating {
        #[serde(rename = "Source")]
        source: Option<String>,
        #[serde(rename = "Value")]
        value: Option<String>,
    },
    #[allow(dead_code)]
    Other(IgnoredAny),
}

impl OmdbTitle {
    fn rotten_tomatoes(&self) -> Option<f64> {
        let value = self.ratings.as_deref()?.iter().find_map(|entry| match entry {
            OmdbRatingEntry::Rating { source, value }
                if source.as_deref() == Some(ROTTEN_TOMATOES_SOURCE) =>
            {
                Some(value.as_deref())
            }
            _ => None,
        })??;
        parse_percentage(value)
    }
}

/// Numbers and numeric strings; everything else, including non-finite
/// values, is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn first_number(candidates: &[&Option<Value>]) -> Option<f64> {
    candidates
        .iter()
        .filter_map(|candidate| Option::as_ref(*candidate))
        .find_map(coerce_number)
}

/// `"85%"` -> `85.0`. Anything not ending in `%` with a numeric prefix is
/// rejected.
pub fn parse_percentage(value: &str) -> Option<f64> {
    let prefix = value.strip_suffix('%')?.trim();
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// HTTP client for the local ratings service and OMDb.
#[derive(Clone)]
pub struct RatingsService {
    client: Client,
    settings: RatingsSettings,
}

impl RatingsService {
    pub fn new(settings: RatingsSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self { client, settings })
    }

    fn local_rating_url(&self, imdb_id: Option<&str>, movie_id: Option<i64>) -> Option<Url> {
        let id = match self.settings.local_mode {
            LocalRatingMode::MovieId => movie_id?.to_string(),
            LocalRatingMode::Imdb => imdb_id.filter(|id| !id.is_empty())?.to_string(),
        };
        let mut url = Url::parse(&self.settings.local_base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("ratings")
            .push(&id);
        Some(url)
    }

    fn omdb_url(&self, imdb_id: Option<&str>) -> Option<Url> {
        let imdb_id = imdb_id.filter(|id| !id.is_empty())?;
        let api_key = self
            .settings
            .omdb_api_key
            .as_deref()
            .filter(|key| !key.is_empty())?;
        let mut url = Url::parse(&self.settings.omdb_base_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push("");
        url.query_pairs_mut()
            .append_pair("apikey", api_key)
            .append_pair("i", imdb_id);
        Some(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Option<T> {
        let response = self.client.get(url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json::<T>().await.ok()
    }
}

#[async_trait]
impl RatingsProvider for RatingsService {
    async fn fetch_local_rating(&self, imdb_id: Option<&str>, movie_id: Option<i64>) -> Option<f64> {
        let url = self.local_rating_url(imdb_id, movie_id)?;
        let payload = self.get_json::<LocalRatingPayload>(url).await?;
        payload.value()
    }

    async fn fetch_rotten_tomatoes(&self, imdb_id: Option<&str>) -> Option<f64> {
        let url = self.omdb_url(imdb_id)?;
        let title = self.get_json::<OmdbTitle>(url).await?;
        title.rotten_tomatoes()
    }
}
