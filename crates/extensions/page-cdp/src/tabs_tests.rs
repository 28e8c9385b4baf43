use super::*;

use std::time::Duration;

use serde_json::{Value, json};
use tabfix_config::ToolsConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fake_page::FakePage;

const TARGET: &str = "pointer-events-none flex justify-center *:pointer-events-auto";

async fn browser(targets: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(targets))
        .mount(&server)
        .await;
    server
}

fn tabs(server: &MockServer) -> CdpTabs {
    let registry = Arc::new(ToolRegistry::new());
    tabfix_tools_class_swap::register_catalog(&registry, &ToolsConfig::default()).unwrap();
    let client = CdpClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    CdpTabs::new(client, registry)
}

fn run() -> PageDirective {
    PageDirective::RunTool {
        tool_id: "css_fixer".to_string(),
    }
}

#[tokio::test]
async fn test_active_tab_is_first_page() {
    let server = browser(json!([
        {"id": "SW", "type": "service_worker", "url": "https://a.test/sw.js"},
        {"id": "P1", "type": "page", "title": "Tables", "url": "https://a.test/"},
        {"id": "P2", "type": "page", "title": "Other", "url": "https://b.test/"}
    ]))
    .await;

    let tab = tabs(&server).active_tab().await.unwrap().unwrap();
    assert_eq!(tab.id, "P1");
    assert_eq!(tab.title, "Tables");
}

#[tokio::test]
async fn test_no_pages_means_no_active_tab() {
    let server = browser(json!([{"id": "SW", "type": "service_worker", "url": "x"}])).await;
    assert!(tabs(&server).active_tab().await.unwrap().is_none());
}

#[tokio::test]
async fn test_endpoint_down_is_connection_error() {
    let client = CdpClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let tabs = CdpTabs::new(client, Arc::new(ToolRegistry::new()));
    let err = tabs.active_tab().await.unwrap_err();
    assert!(matches!(err, TransportError::Connection(_)));
}

#[tokio::test]
async fn test_restricted_page() {
    let server = browser(json!([{
        "id": "P1",
        "type": "page",
        "url": "chrome://extensions/",
        "webSocketDebuggerUrl": "ws://127.0.0.1:9/devtools/page/P1"
    }]))
    .await;
    let tabs = tabs(&server);

    let tab = tabs.active_tab().await.unwrap().unwrap();
    let err = tabs.send(&tab, run()).await.unwrap_err();
    assert_eq!(err.to_string(), "Cannot access contents of url \"chrome://extensions/\"");
}

#[tokio::test]
async fn test_closed_tab() {
    let server = browser(json!([])).await;
    let err = tabs(&server)
        .send(&Tab::new("GONE", "https://a.test/"), run())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::TabClosed(id) if id == "GONE"));
}

#[tokio::test]
async fn test_target_without_socket_has_no_receiver() {
    let server = browser(json!([{"id": "P1", "type": "page", "url": "https://a.test/"}])).await;
    let err = tabs(&server)
        .send(&Tab::new("P1", "https://a.test/"), run())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::NoReceiver(_)));
}

#[tokio::test]
async fn test_run_against_live_page() {
    let page = FakePage::start(&[("div", Some("w-[100cqw] x")), ("div", Some("y"))]).await;
    let server = browser(json!([{
        "id": "P1",
        "type": "page",
        "url": "https://a.test/",
        "webSocketDebuggerUrl": page.ws_url()
    }]))
    .await;
    let tabs = tabs(&server);

    let tab = tabs.active_tab().await.unwrap().unwrap();
    let result = tabs.send(&tab, run()).await.unwrap();
    assert_eq!(result.count, 1);
    assert_eq!(result.message, "Fixed 1 table element!");
    assert_eq!(page.classes()[0].as_deref(), Some(TARGET));
}
