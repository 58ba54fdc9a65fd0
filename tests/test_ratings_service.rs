use movie_api_backend::configuration::LocalRatingMode;
use movie_api_backend::services::{RatingsProvider, RatingsService};
use test_startup::*;

fn service_for(stub: &RatingsStub, mode: LocalRatingMode) -> RatingsService {
    RatingsService::new(stub.settings(mode)).expect("Failed to build ratings client")
}

#[actix_rt::test]
async fn local_rating_averages_rows_by_imdb_id() {
    let stub = spawn_ratings_stub().await;
    let service = service_for(&stub, LocalRatingMode::Imdb);

    let rating = service.fetch_local_rating(Some("tt0000003"), Some(3)).await;

    assert_eq!(rating, Some(8.5));
    assert_eq!(stub.local_hits(), 1);
}

#[actix_rt::test]
async fn local_rating_uses_internal_id_in_movie_id_mode() {
    let stub = spawn_ratings_stub().await;
    let service = service_for(&stub, LocalRatingMode::MovieId);

    let rating = service.fetch_local_rating(Some("tt0000003"), Some(3)).await;

    assert_eq!(rating, Some(7.25));
}

#[actix_rt::test]
async fn local_rating_without_identifier_makes_no_request() {
    let stub = spawn_ratings_stub().await;

    let imdb = service_for(&stub, LocalRatingMode::Imdb);
    assert_eq!(imdb.fetch_local_rating(None, Some(3)).await, None);
    assert_eq!(imdb.fetch_local_rating(Some(""), Some(3)).await, None);

    let movie_id = service_for(&stub, LocalRatingMode::MovieId);
    assert_eq!(movie_id.fetch_local_rating(Some("tt0000003"), None).await, None);

    assert_eq!(stub.local_hits(), 0);
}

#[actix_rt::test]
async fn local_rating_failures_are_absent() {
    let stub = spawn_ratings_stub().await;
    let service = service_for(&stub, LocalRatingMode::Imdb);

    // 500, unusable summary, non-JSON body, 404
    for imdb_id in ["tt0000001", "tt0000002", "tt0000004", "tt0000007"] {
        assert_eq!(
            service.fetch_local_rating(Some(imdb_id), None).await,
            None,
            "expected no rating for {}",
            imdb_id
        );
    }
    assert_eq!(stub.local_hits(), 4);
}

#[actix_rt::test]
async fn local_rating_times_out() {
    let stub = spawn_ratings_stub().await;
    let service = service_for(&stub, LocalRatingMode::Imdb);

    let started = std::time::Instant::now();
    let rating = service.fetch_local_rating(Some("tt0000006"), None).await;

    assert_eq!(rating, None);
    assert!(started.elapsed() < std::time::Duration::from_secs(3));
}

#[actix_rt::test]
async fn unreachable_services_give_no_rating() {
    let stub = spawn_ratings_stub().await;
    let mut settings = stub.settings(LocalRatingMode::Imdb);
    settings.local_base_url = "http://127.0.0.1:9".to_string();
    settings.omdb_base_url = "http://127.0.0.1:9".to_string();
    let service = RatingsService::new(settings).expect("Failed to build ratings client");

    assert_eq!(service.fetch_local_rating(Some("tt0000003"), None).await, None);
    assert_eq!(service.fetch_rotten_tomatoes(Some("tt0000003")).await, None);
}

#[actix_rt::test]
async fn rotten_tomatoes_score_is_read_from_omdb() {
    let stub = spawn_ratings_stub().await;
    let service = service_for(&stub, LocalRatingMode::Imdb);

    assert_eq!(service.fetch_rotten_tomatoes(Some("tt0000003")).await, Some(90.0));
    assert_eq!(stub.omdb_hits(), 1);
}

#[actix_rt::test]
async fn rotten_tomatoes_missing_or_failed_is_absent() {
    let stub = spawn_ratings_stub().await;
    let service = service_for(&stub, LocalRatingMode::Imdb);

    // only an IMDb rating, "N/A%", 503, Response False
    for imdb_id in ["tt0000001", "tt0000002", "tt0000004", "tt0000007"] {
        assert_eq!(
            service.fetch_rotten_tomatoes(Some(imdb_id)).await,
            None,
            "expected no score for {}",
            imdb_id
        );
    }
}

#[actix_rt::test]
async fn rotten_tomatoes_needs_key_and_id() {
    let stub = spawn_ratings_stub().await;

    let service = service_for(&stub, LocalRatingMode::Imdb);
    assert_eq!(service.fetch_rotten_tomatoes(None).await, None);

    let mut settings = stub.settings(LocalRatingMode::Imdb);
    settings.omdb_api_key = None;
    let keyless = RatingsService::new(settings).expect("Failed to build ratings client");
    assert_eq!(keyless.fetch_rotten_tomatoes(Some("tt0000003")).await, None);

    assert_eq!(stub.omdb_hits(), 0);
}

#[actix_rt::test]
async fn rotten_tomatoes_with_wrong_key_is_absent() {
    let stub = spawn_ratings_stub().await;
    let mut settings = stub.settings(LocalRatingMode::Imdb);
    settings.omdb_api_key = Some("wrong-key".to_string());
    let service = RatingsService::new(settings).expect("Failed to build ratings client");

    assert_eq!(service.fetch_rotten_tomatoes(Some("tt0000003")).await, None);
    assert_eq!(stub.omdb_hits(), 1);
}
