use super::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(endpoint: &str) -> CdpClient {
    CdpClient::new(endpoint, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_endpoint_trailing_slash_trimmed() {
    assert_eq!(client("http://127.0.0.1:9222/").endpoint(), "http://127.0.0.1:9222");
}

#[test]
fn test_rejects_non_http_endpoint() {
    assert!(CdpClient::new("ws://127.0.0.1:9222", Duration::from_secs(1)).is_err());
    assert!(CdpClient::new("not a url", Duration::from_secs(1)).is_err());
}

#[tokio::test]
async fn test_list_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "A1",
                "type": "page",
                "title": "Tables",
                "url": "https://example.com/tables",
                "webSocketDebuggerUrl": "ws://127.0.0.1:9222/devtools/page/A1"
            },
            {
                "id": "W1",
                "type": "service_worker",
                "url": "https://example.com/sw.js"
            }
        ])))
        .mount(&server)
        .await;

    let pages = client(&server.uri()).list_pages().await.unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].title, "Tables");
    assert!(pages[0].is_page());
    assert!(!pages[1].is_page());
    assert!(pages[1].web_socket_debugger_url.is_none());
}

#[tokio::test]
async fn test_list_pages_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/list"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server.uri()).list_pages().await.unwrap_err();
    assert!(matches!(err, CdpError::BrowserNotAvailable(_)));
}

#[tokio::test]
async fn test_list_pages_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server.uri()).list_pages().await.unwrap_err();
    assert!(matches!(err, CdpError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_attach_without_socket_url() {
    let page = PageInfo {
        id: "A1".to_string(),
        page_type: "page".to_string(),
        title: String::new(),
        url: "https://example.com".to_string(),
        web_socket_debugger_url: None,
    };
    let err = match client("http://127.0.0.1:9222").attach(&page).await {
        Ok(_) => panic!("attached without a socket url"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("attached to another client"));
}
