use serde_json::json;
use supadata::{
    BatchRequest, ChannelVideosParams, Client, ClientBuilder, CrawlRequest, ErrorCode, MapParams,
    ScrapeParams, SearchParams, SupadataError, TranscriptParams,
};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    ClientBuilder::new()
        .api_key("test-api-key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

async fn error_server(status: u16, code: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "error": code,
            "message": "Test message",
            "details": "Some details",
            "documentationUrl": "https://supadata.ai/docs/errors"
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn every_identifier_decodes_from_an_error_body() {
    let identifiers = [
        ("invalid-request", ErrorCode::InvalidRequest),
        ("internal-error", ErrorCode::InternalError),
        ("forbidden", ErrorCode::Forbidden),
        ("unauthorized", ErrorCode::Unauthorized),
        ("upgrade-required", ErrorCode::UpgradeRequired),
        ("transcript-unavailable", ErrorCode::TranscriptUnavailable),
        ("not-found", ErrorCode::NotFound),
        ("limit-exceeded", ErrorCode::LimitExceeded),
    ];

    for (wire, expected) in identifiers {
        let server = error_server(400, wire).await;
        let client = test_client(&server);

        let err = client.metadata("https://youtube.com/watch?v=123").await.unwrap_err();
        match err {
            SupadataError::Api {
                code,
                message,
                details,
                documentation_url,
            } => {
                assert_eq!(code, expected);
                assert_eq!(message, "Test message");
                assert_eq!(details.as_deref(), Some("Some details"));
                assert_eq!(
                    documentation_url.as_deref(),
                    Some("https://supadata.ai/docs/errors")
                );
            }
            other => panic!("expected Api error for {wire}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn every_endpoint_surfaces_the_typed_error() {
    let server = error_server(401, "unauthorized").await;
    let client = test_client(&server);

    let errors = vec![
        client
            .transcript(&TranscriptParams::new("x"))
            .await
            .map(|_| ())
            .unwrap_err(),
        client.transcript_result("x").await.map(|_| ()).unwrap_err(),
        client.metadata("x").await.map(|_| ()).unwrap_err(),
        client.me().await.map(|_| ()).unwrap_err(),
        client
            .scrape(&ScrapeParams::new("x"))
            .await
            .map(|_| ())
            .unwrap_err(),
        client.map(&MapParams::new("x")).await.map(|_| ()).unwrap_err(),
        client
            .crawl(&CrawlRequest::new("x"))
            .await
            .map(|_| ())
            .unwrap_err(),
        client.crawl_result("x", 0).await.map(|_| ()).unwrap_err(),
        client.youtube_video("x").await.map(|_| ()).unwrap_err(),
        client.youtube_channel("x").await.map(|_| ()).unwrap_err(),
        client.youtube_playlist("x").await.map(|_| ()).unwrap_err(),
        client
            .youtube_channel_videos(&ChannelVideosParams::new("x"))
            .await
            .map(|_| ())
            .unwrap_err(),
        client
            .youtube_search(&SearchParams::new("x"))
            .await
            .map(|_| ())
            .unwrap_err(),
        client
            .youtube_video_batch(&BatchRequest::videos(["x"]))
            .await
            .map(|_| ())
            .unwrap_err(),
        client
            .youtube_transcript_batch(&BatchRequest::channel("x"))
            .await
            .map(|_| ())
            .unwrap_err(),
        client.youtube_batch_result("x").await.map(|_| ()).unwrap_err(),
    ];

    for err in errors {
        assert!(
            matches!(
                err,
                SupadataError::Api {
                    code: ErrorCode::Unauthorized,
                    ..
                }
            ),
            "expected unauthorized Api error, got {err:?}"
        );
    }
}

#[tokio::test]
async fn status_is_authoritative_over_body_shape() {
    // A well-formed error body on a success status is decoded as a success
    // shape (and fails structurally), never as an error.
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "internal-error",
            "message": "should not be treated as an error body"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, SupadataError::Decode(_)));
}

#[tokio::test]
async fn empty_error_body_degrades_to_status() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.me().await.unwrap_err();
    assert_eq!(err.to_string(), "request failed with status 500");
}
