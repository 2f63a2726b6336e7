use std::time::Duration;

use mangarank::core::category::Category;
use mangarank::core::item::UNTITLED;
use mangarank::source::{HttpRankingSource, RankingSource, SourceError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn source_for(server: &MockServer) -> HttpRankingSource {
    HttpRankingSource::new(server.uri(), Duration::from_secs(5))
}

const RATING_BODY: &str = r#"{
  "data": [
    {"id": "a1", "title": "Berserk", "coverImageUrl": "https://covers.test/a1.jpg",
     "rating": {"rating": {"bayesian": 9.12}, "follows": 250000}},
    {"id": "b2", "title": "Vagabond",
     "rating": {"rating": {"bayesian": 8.97}, "follows": 180500}},
    {"id": 3, "rating": {"follows": 999}}
  ]
}"#;

// ============================================================================
// HTTP Source Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_requests_first_page_of_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manga/rating"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RATING_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = source_for(&mock_server)
        .fetch(Category::Top, 1)
        .await
        .unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, "a1");
    assert_eq!(items[0].rating.bayesian_score, Some(9.12));
    assert_eq!(items[1].cover_image_url, None);
    assert_eq!(items[2].id, "3");
    assert_eq!(items[2].title, UNTITLED);
    assert_eq!(items[2].rating.bayesian_score, None);
    assert_eq!(items[2].rating.follow_count, Some(999));
}

#[tokio::test]
async fn test_each_category_hits_its_own_endpoint() {
    let mock_server = MockServer::start().await;

    for key in ["rating", "favourite", "latestArrivals"] {
        Mock::given(method("GET"))
            .and(path(format!("/manga/{key}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!(r#"{{"data":[{{"id":"{key}","title":"{key}"}}]}}"#)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let source = source_for(&mock_server);
    for category in Category::ALL {
        let items = source.fetch(category, 1).await.unwrap();
        assert_eq!(items[0].id, category.fetch_key());
    }
}

#[tokio::test]
async fn test_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manga/favourite"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let result = source_for(&mock_server).fetch(Category::Favourite, 1).await;

    assert!(matches!(
        result,
        Err(SourceError::Api { status: 503, ref message }) if message == "Service Unavailable"
    ));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manga/latestArrivals"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = source_for(&mock_server).fetch(Category::New, 1).await;

    assert!(matches!(result, Err(SourceError::Parse(_))));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/manga/rating"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(RATING_BODY)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let source = HttpRankingSource::new(mock_server.uri(), Duration::from_millis(200));
    let result = source.fetch(Category::Top, 1).await;

    assert!(matches!(result, Err(SourceError::Timeout { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on port 9 locally.
    let source = HttpRankingSource::new("http://127.0.0.1:9", Duration::from_secs(5));
    let result = source.fetch(Category::Top, 1).await;

    assert!(matches!(result, Err(SourceError::Network(_))));
}
