use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use shortener_engine::{FailureKind, ReqwestShortener, ShortenError, ShortenSettings, Shortener};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn shortener_for(server: &MockServer) -> ReqwestShortener {
    let settings = ShortenSettings {
        endpoint: format!("{}/api/conv", server.uri()),
        ..ShortenSettings::default()
    };
    ReqwestShortener::new(settings).expect("valid settings")
}

#[tokio::test]
async fn posts_params_payload_and_returns_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/conv"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "params": { "url": "https://example.com" } })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("https://url.omoknooni.link/abc123"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let short = shortener_for(&server)
        .shorten("https://example.com")
        .await
        .expect("shorten ok");

    assert_eq!(short, "https://url.omoknooni.link/abc123");
}

#[tokio::test]
async fn json_string_body_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/conv"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#""https://url.omoknooni.link/a/Xy_9-0a""#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let short = shortener_for(&server)
        .shorten("https://example.com/some/long/path?q=1")
        .await
        .expect("shorten ok");

    assert_eq!(short, "https://url.omoknooni.link/a/Xy_9-0a");
}

#[tokio::test]
async fn unexpected_body_shape_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/conv"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"short_id":"abc"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let short = shortener_for(&server)
        .shorten("https://example.com")
        .await
        .expect("shorten ok");

    assert_eq!(short, r#"{"short_id":"abc"}"#);
}

#[tokio::test]
async fn non_success_status_fails_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/conv"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = shortener_for(&server)
        .shorten("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn times_out_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/conv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("https://url.omoknooni.link/slow"),
        )
        .mount(&server)
        .await;

    let settings = ShortenSettings {
        endpoint: format!("{}/api/conv", server.uri()),
        request_timeout: Some(Duration::from_millis(50)),
        ..ShortenSettings::default()
    };
    let shortener = ReqwestShortener::new(settings).expect("valid settings");

    let err = shortener.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn rejects_oversized_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/conv"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = ShortenSettings {
        endpoint: format!("{}/api/conv", server.uri()),
        max_body_bytes: 10,
        ..ShortenSettings::default()
    };
    let shortener = ReqwestShortener::new(settings).expect("valid settings");

    let err = shortener.shorten("https://example.com").await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

/// Serves one chunked response with no Content-Length, so only the streaming cap applies.
async fn serve_chunked_once(chunks: &'static [&'static str]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        // The JSON payload ends the request.
        while !request.ends_with(b"}}") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let mut response = String::from(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\
             Transfer-Encoding: chunked\r\nConnection: close\r\n\r\n",
        );
        for chunk in chunks {
            response.push_str(&format!("{:x}\r\n{}\r\n", chunk.len(), chunk));
        }
        response.push_str("0\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    format!("http://{addr}/api/conv")
}

#[tokio::test]
async fn rejects_oversized_chunked_body_while_streaming() {
    let endpoint = serve_chunked_once(&["012345", "678901"]).await;
    let settings = ShortenSettings {
        endpoint,
        max_body_bytes: 10,
        ..ShortenSettings::default()
    };
    let shortener = ReqwestShortener::new(settings).expect("valid settings");

    let err = shortener.shorten("https://example.com").await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(12)
        }
    );
}

#[tokio::test]
async fn chunked_body_within_cap_is_accepted() {
    let endpoint = serve_chunked_once(&["https://url.omok", "noo.link/abc123"]).await;
    let settings = ShortenSettings {
        endpoint,
        ..ShortenSettings::default()
    };
    let shortener = ReqwestShortener::new(settings).expect("valid settings");

    let short = shortener.shorten("https://example.com").await.expect("shorten ok");
    assert_eq!(short, "https://url.omoknoo.link/abc123");
}

#[test]
fn client_setup_failures_are_not_reported_as_network_errors() {
    let err = ShortenError {
        kind: FailureKind::Client,
        message: "builder error".to_string(),
    };

    assert_eq!(err.to_string(), "client setup error: builder error");
    assert_ne!(FailureKind::Client.to_string(), FailureKind::Network.to_string());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let settings = ShortenSettings {
        endpoint: format!("http://127.0.0.1:{port}/api/conv"),
        ..ShortenSettings::default()
    };
    let shortener = ReqwestShortener::new(settings).expect("valid settings");

    let err = shortener.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[test]
fn invalid_endpoint_is_rejected_up_front() {
    let settings = ShortenSettings {
        endpoint: "not a url".to_string(),
        ..ShortenSettings::default()
    };
    let err = ReqwestShortener::new(settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}

#[test]
fn default_settings_target_the_public_endpoint() {
    let settings = ShortenSettings::default();
    assert_eq!(settings.endpoint, "https://url.omoknooni.link/api/conv");
    assert_eq!(settings.request_timeout, None);
    assert_eq!(settings.connect_timeout, None);
}
