// End-to-end describe_image tests against a mock VLM endpoint

use img2text::config::VlmConfig;
use img2text::plugin::ViewImagePlugin;
use img2text::vlm::models::{EMPTY_STREAM_PLACEHOLDER, NO_CHOICES_PLACEHOLDER};

const VALID_IMAGE: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

fn config_for(server_url: &str) -> VlmConfig {
    VlmConfig {
        invoke_url: server_url.to_string(),
        model: "nvidia/neva-22b".to_string(),
        ..VlmConfig::default()
    }
}

#[tokio::test]
async fn test_non_streamed_description() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/nvidia/neva-22b")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"A cat."}}]}"#)
        .create_async()
        .await;

    let plugin = ViewImagePlugin::new(config_for(&server.url()));
    let result = plugin.describe_image(VALID_IMAGE).await;

    assert_eq!(result, "A cat.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_streamed_trims_whitespace() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/nvidia/neva-22b")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"\n  A dog on the sofa.  \n"}}]}"#)
        .create_async()
        .await;

    let plugin = ViewImagePlugin::new(config_for(&server.url()));
    assert_eq!(
        plugin.describe_image(VALID_IMAGE).await,
        "A dog on the sofa."
    );
}

#[tokio::test]
async fn test_empty_choices_placeholder() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/nvidia/neva-22b")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let plugin = ViewImagePlugin::new(config_for(&server.url()));
    assert_eq!(
        plugin.describe_image(VALID_IMAGE).await,
        NO_CHOICES_PLACEHOLDER
    );
}

#[tokio::test]
async fn test_streamed_description() {
    let mut server = mockito::Server::new_async().await;
    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\" world\"}}]}\n\n",
        "data: [DONE]\n\n",
    );
    let mock = server
        .mock("POST", "/nvidia/neva-22b")
        .match_header("accept", "text/event-stream")
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(body)
        .create_async()
        .await;

    let config = VlmConfig {
        stream: true,
        ..config_for(&server.url())
    };
    let plugin = ViewImagePlugin::new(config);
    assert_eq!(plugin.describe_image(VALID_IMAGE).await, "Hello world");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_streamed_skips_malformed_lines() {
    let mut server = mockito::Server::new_async().await;
    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\n",
        "data: {this is not json}\n\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\" world\"}}]}\n\n",
        "data: [DONE]\n\n",
    );
    let _mock = server
        .mock("POST", "/nvidia/neva-22b")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let config = VlmConfig {
        stream: true,
        ..config_for(&server.url())
    };
    let plugin = ViewImagePlugin::new(config);
    assert_eq!(plugin.describe_image(VALID_IMAGE).await, "Hello world");
}

#[tokio::test]
async fn test_streamed_without_fragments_returns_placeholder() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/nvidia/neva-22b")
        .with_status(200)
        .with_body("data: [DONE]\n\n")
        .create_async()
        .await;

    let config = VlmConfig {
        stream: true,
        ..config_for(&server.url())
    };
    let plugin = ViewImagePlugin::new(config);
    assert_eq!(
        plugin.describe_image(VALID_IMAGE).await,
        EMPTY_STREAM_PLACEHOLDER
    );
}

#[tokio::test]
async fn test_http_500_yields_status_error_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/nvidia/neva-22b")
        .with_status(500)
        .with_body("server error")
        .create_async()
        .await;

    let plugin = ViewImagePlugin::new(config_for(&server.url()));
    let result = plugin.describe_image(VALID_IMAGE).await;

    assert!(result.contains("500"), "got: {}", result);
    assert!(result.contains("server error"), "got: {}", result);
}

#[tokio::test]
async fn test_connection_failure_yields_network_error_text() {
    // Nothing listens on port 9 (discard).
    let plugin = ViewImagePlugin::new(config_for("http://127.0.0.1:9"));
    let result = plugin.describe_image(VALID_IMAGE).await;
    assert!(result.starts_with("Network error:"), "got: {}", result);
}

#[tokio::test]
async fn test_invalid_image_never_hits_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/nvidia/neva-22b")
        .expect(0)
        .create_async()
        .await;

    let plugin = ViewImagePlugin::new(config_for(&server.url()));
    for bad in [
        "not-a-data-url",
        "data:image/gif;base64,aGVsbG8=",
        "data:image/png;base64,invalid spaces",
        "data:image/png;base64,",
    ] {
        let result = plugin.describe_image(bad).await;
        assert!(result.starts_with("Invalid image format:"), "got: {}", result);
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_token_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/nvidia/neva-22b")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let config = VlmConfig {
        api_key: "test-token".to_string(),
        ..config_for(&server.url())
    };
    let plugin = ViewImagePlugin::new(config);
    assert_eq!(plugin.describe_image(VALID_IMAGE).await, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_authorization_header_without_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/nvidia/neva-22b")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let plugin = ViewImagePlugin::new(config_for(&server.url()));
    assert_eq!(plugin.describe_image(VALID_IMAGE).await, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_oversized_image_rejected_when_cap_set() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/nvidia/neva-22b")
        .expect(0)
        .create_async()
        .await;

    let config = VlmConfig {
        max_image_bytes: Some(1024),
        ..config_for(&server.url())
    };
    let plugin = ViewImagePlugin::new(config);
    let big = format!("data:image/png;base64,{}", "A".repeat(8192));
    let result = plugin.describe_image(&big).await;

    assert!(result.starts_with("Invalid image format:"), "got: {}", result);
    mock.assert_async().await;
}
