use sqlx::{FromRow, SqlitePool};
use tracing::Instrument;

const MOVIE_COLUMNS: &str = "movieId, imdbId, title, overview, genres, releaseDate, budget, \
                             runtime, language, productionCompanies";

// Characters removed from both the stored genres and the search needle.
const STRIPPED_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

// Stored genres with `STRIPPED_CHARS` removed and ASCII lowercased, the same
// shape `genre_fragment` produces.
const NORMALIZED_GENRES: &str = "lower(replace(replace(replace(replace(genres, ' ', ''), \
                                 char(9), ''), char(10), ''), char(13), ''))";

/// A row of the `movies` table, exactly as stored.
///
/// `genres` and `production_companies` hold JSON arrays serialized as text;
/// they are only given structure by the service layer.
#[derive(FromRow, Debug, Clone, PartialEq)]
#[sqlx(rename_all = "camelCase")]
pub struct MovieRecord {
    pub movie_id: i64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub overview: Option<String>,
    pub genres: Option<String>,
    pub release_date: Option<String>,
    pub budget: Option<i64>,
    pub runtime: Option<i64>,
    pub language: Option<String>,
    pub production_companies: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Builds the `"name":"<genre>"` fragment searched for in the normalized
/// genres text.
fn genre_fragment(genre: &str) -> String {
    let compact: String = genre.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    format!("\"name\":\"{}\"", compact.to_ascii_lowercase())
}

fn year_key(year: i32) -> String {
    format!("{:04}", year)
}

/// Read-only accessor over the movie catalog.
#[derive(Clone, Debug)]
pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count_all(&self) -> Result<i64, sqlx::Error> {
        let query_span = tracing::info_span!("Counting all movies");
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .instrument(query_span)
            .await
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<MovieRecord>, sqlx::Error> {
        let query_span = tracing::info_span!("Listing movies", offset, limit);
        let query = format!(
            "SELECT {} FROM movies ORDER BY releaseDate ASC, movieId ASC LIMIT ? OFFSET ?",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, MovieRecord>(query.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .instrument(query_span)
            .await
    }

    pub async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Option<MovieRecord>, sqlx::Error> {
        let query_span = tracing::info_span!("Fetching movie by imdb id", imdb_id);
        let query = format!("SELECT {} FROM movies WHERE imdbId = ?", MOVIE_COLUMNS);
        sqlx::query_as::<_, MovieRecord>(query.as_str())
            .bind(imdb_id)
            .fetch_optional(&self.pool)
            .instrument(query_span)
            .await
    }

    pub async fn find_by_id(&self, movie_id: i64) -> Result<Option<MovieRecord>, sqlx::Error> {
        let query_span = tracing::info_span!("Fetching movie by id", movie_id);
        let query = format!("SELECT {} FROM movies WHERE movieId = ?", MOVIE_COLUMNS);
        sqlx::query_as::<_, MovieRecord>(query.as_str())
            .bind(movie_id)
            .fetch_optional(&self.pool)
            .instrument(query_span)
            .await
    }

    pub async fn count_by_year(&self, year: i32) -> Result<i64, sqlx::Error> {
        let query_span = tracing::info_span!("Counting movies by year", year);
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE substr(releaseDate, 1, 4) = ?")
            .bind(year_key(year))
            .fetch_one(&self.pool)
            .instrument(query_span)
            .await
    }

    pub async fn list_by_year(
        &self,
        year: i32,
        offset: i64,
        limit: i64,
        order: SortOrder,
    ) -> Result<Vec<MovieRecord>, sqlx::Error> {
        let query_span = tracing::info_span!("Listing movies by year", year, offset, limit, ?order);
        let query = format!(
            "SELECT {columns} FROM movies \
             WHERE substr(releaseDate, 1, 4) = ? \
             ORDER BY releaseDate {dir}, movieId {dir} \
             LIMIT ? OFFSET ?",
            columns = MOVIE_COLUMNS,
            dir = order.as_sql()
        );
        sqlx::query_as::<_, MovieRecord>(query.as_str())
            .bind(year_key(year))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .instrument(query_span)
            .await
    }

    pub async fn count_by_genre(&self, genre: &str) -> Result<i64, sqlx::Error> {
        let query_span = tracing::info_span!("Counting movies by genre", genre);
        let query = format!(
            "SELECT COUNT(*) FROM movies WHERE instr({}, ?) > 0",
            NORMALIZED_GENRES
        );
        sqlx::query_scalar::<_, i64>(query.as_str())
            .bind(genre_fragment(genre))
            .fetch_one(&self.pool)
            .instrument(query_span)
            .await
    }

    pub async fn list_by_genre(
        &self,
        genre: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<MovieRecord>, sqlx::Error> {
        let query_span = tracing::info_span!("Listing movies by genre", genre, offset, limit);
        let query = format!(
            "SELECT {} FROM movies \
             WHERE instr({}, ?) > 0 \
             ORDER BY releaseDate ASC, movieId ASC \
             LIMIT ? OFFSET ?",
            MOVIE_COLUMNS, NORMALIZED_GENRES
        );
        sqlx::query_as::<_, MovieRecord>(query.as_str())
            .bind(genre_fragment(genre))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .instrument(query_span)
            .await
    }
}
