use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub(crate) const CREATE_MOVIES_TABLE: &str = include_str!("../../tests/fixtures/movies_schema.sql");

// (movieId, imdbId, title, genres, releaseDate, budget)
const FIXTURES: &[(i64, Option<&str>, &str, Option<&str>, Option<&str>, Option<i64>)] = &[
    (1, Some("tt0000001"), "Early Bird", Some(r#"[{"id":28,"name":"Action"}]"#), Some("1999-03-01"), Some(1_000_000)),
    (2, Some("tt0000002"), "Drama Queen", Some(r#"[ { "id": 18, "name": "Drama" } ]"#), Some("1999-11-20"), Some(0)),
    (3, Some("tt0000003"), "Mixed Bag", Some(r#"[{"name":"Action"},{"name":"Comedy"}]"#), Some("2000-05-05"), None),
    (4, Some("tt0000004"), "Live Wire", Some(r#"[{"name":"Live Action"}]"#), Some("2000-01-15"), Some(25_000_000)),
    (5, None, "Undated", Some("[]"), None, None),
    (6, Some("tt0000006"), "Far Out", Some(r#"[{"id":878,"name":"Science Fiction"}]"#), Some("2001-07-04"), Some(999_999_999)),
    (7, Some("tt0000007"), "Broken Row", Some("not json"), Some("2000-12-31"), Some(100_000_000)),
];

/// Single-connection in-memory catalog; every connection to `:memory:` is a
/// separate database, so the pool must never open a second one.
pub(crate) async fn empty_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    sqlx::query(CREATE_MOVIES_TABLE)
        .execute(&pool)
        .await
        .expect("Failed to create movies table");
    pool
}

pub(crate) async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    for &(movie_id, imdb_id, title, genres, release_date, budget) in FIXTURES {
        sqlx::query(
            r#"
            INSERT INTO movies (movieId, imdbId, title, overview, genres, releaseDate, budget,
                                runtime, language, productionCompanies)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(movie_id)
        .bind(imdb_id)
        .bind(title)
        .bind(format!("{} overview", title))
        .bind(genres)
        .bind(release_date)
        .bind(budget)
        .bind(120_i64)
        .bind("en")
        .bind(r#"[{"name":"Warner Bros"},{"name":""},"Universal"]"#)
        .execute(&pool)
        .await
        .expect("Failed to seed movies table");
    }
    pool
}
