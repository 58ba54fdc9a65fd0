use std::sync::Arc;

use futures_util::future::join;

use super::{mean, round_to_cents, MovieDetails, MovieListItem, MoviePage, Rating, RatingSource, RatingsProvider};
use crate::error::CatalogError;
use crate::repository::{MovieRecord, MovieRepository, SortOrder};

/// Turns catalog rows into list and detail views.
#[derive(Clone)]
pub struct MovieService {
    repository: MovieRepository,
    ratings: Arc<dyn RatingsProvider>,
}

/// `page` is 1-based.
fn page_offset(page: u32, per_page: u32) -> i64 {
    i64::from(page.saturating_sub(1)) * i64::from(per_page)
}

fn to_page(page: u32, per_page: u32, total: i64, rows: Vec<MovieRecord>) -> MoviePage {
    MoviePage {
        page,
        per_page,
        total,
        items: rows.into_iter().map(MovieListItem::from).collect(),
    }
}

fn collect_ratings(local: Option<f64>, rotten_tomatoes: Option<f64>) -> Vec<Rating> {
    [
        (RatingSource::Local, local),
        (RatingSource::RottenTomatoes, rotten_tomatoes),
    ]
    .into_iter()
    .filter_map(|(source, value)| {
        value.map(|value| Rating {
            source,
            value: round_to_cents(value),
        })
    })
    .collect()
}

fn average_rating(ratings: &[Rating]) -> Option<f64> {
    let values: Vec<f64> = ratings.iter().map(|rating| rating.value).collect();
    mean(&values).map(round_to_cents)
}

impl MovieService {
    pub fn new(repository: MovieRepository, ratings: Arc<dyn RatingsProvider>) -> Self {
        Self {
            repository,
            ratings,
        }
    }

    pub async fn list_all(&self, page: u32, per_page: u32) -> Result<MoviePage, CatalogError> {
        let total = self.repository.count_all().await?;
        let rows = self
            .repository
            .list(page_offset(page, per_page), i64::from(per_page))
            .await?;
        Ok(to_page(page, per_page, total, rows))
    }

    pub async fn list_by_year(
        &self,
        year: i32,
        page: u32,
        per_page: u32,
        order: SortOrder,
    ) -> Result<MoviePage, CatalogError> {
        let total = self.repository.count_by_year(year).await?;
        let rows = self
            .repository
            .list_by_year(year, page_offset(page, per_page), i64::from(per_page), order)
            .await?;
        Ok(to_page(page, per_page, total, rows))
    }

    pub async fn list_by_genre(
        &self,
        genre: &str,
        page: u32,
        per_page: u32,
    ) -> Result<MoviePage, CatalogError> {
        let total = self.repository.count_by_genre(genre).await?;
        let rows = self
            .repository
            .list_by_genre(genre, page_offset(page, per_page), i64::from(per_page))
            .await?;
        Ok(to_page(page, per_page, total, rows))
    }

    /// Detail view with both rating sources merged.
    ///
    /// Unknown ids return `Ok(None)` before any rating provider is called.
    pub async fn details(&self, imdb_id: &str) -> Result<Option<MovieDetails>, CatalogError> {
        let record = match self.repository.find_by_imdb_id(imdb_id).await? {
            Some(record) => record,
            None => return Ok(None),
        };

        let (local, rotten_tomatoes) = join(
            self.ratings
                .fetch_local_rating(record.imdb_id.as_deref(), Some(record.movie_id)),
            self.ratings.fetch_rotten_tomatoes(record.imdb_id.as_deref()),
        )
        .await;

        let ratings = collect_ratings(local, rotten_tomatoes);
        let average = average_rating(&ratings);
        Ok(Some(MovieDetails::new(record, ratings, average)))
    }
}
