//! A fake page target speaking the subset of CDP the DOM adapter uses.

use std::net::SocketAddr;
use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;

struct Node {
    id: i64,
    tag: String,
    class_name: Option<String>,
}

pub(crate) struct FakePage {
    addr: SocketAddr,
    nodes: Arc<Mutex<Vec<Node>>>,
    task: tokio::task::JoinHandle<()>,
}

impl FakePage {
    pub(crate) async fn start(elements: &[(&str, Option<&str>)]) -> Self {
        let nodes: Vec<Node> = elements
            .iter()
            .enumerate()
            .map(|(i, (tag, class_name))| Node {
                id: 10 + i as i64,
                tag: tag.to_string(),
                class_name: class_name.map(str::to_string),
            })
            .collect();
        let nodes = Arc::new(Mutex::new(nodes));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = {
            let nodes = nodes.clone();
            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    tokio::spawn(serve(stream, nodes.clone()));
                }
            })
        };

        Self { addr, nodes, task }
    }

    pub(crate) fn ws_url(&self) -> String {
        format!("ws://{}/devtools/page/FAKE", self.addr)
    }

    pub(crate) fn classes(&self) -> Vec<Option<String>> {
        self.nodes.lock().iter().map(|n| n.class_name.clone()).collect()
    }

    pub(crate) fn remove(&self, index: usize) {
        self.nodes.lock().remove(index);
    }
}

impl Drop for FakePage {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(stream: TcpStream, nodes: Arc<Mutex<Vec<Node>>>) {
    let Ok(mut ws) = tokio_tungstenite::accept_async(stream).await else {
        return;
    };
    while let Some(Ok(msg)) = ws.next().await {
        let Message::Text(text) = msg else { continue };
        let request: Value = serde_json::from_str(&text).unwrap();
        let reply = match answer(&request, &nodes) {
            Ok(result) => json!({"id": request["id"], "result": result}),
            Err(message) => json!({"id": request["id"], "error": {"code": -32000, "message": message}}),
        };
        if ws.send(Message::Text(reply.to_string().into())).await.is_err() {
            break;
        }
    }
}

fn answer(request: &Value, nodes: &Mutex<Vec<Node>>) -> Result<Value, String> {
    let params = &request["params"];
    match request["method"].as_str().unwrap_or_default() {
        "DOM.getDocument" => Ok(json!({"root": {"nodeId": 1, "nodeName": "#document"}})),
        "DOM.querySelectorAll" => {
            let selector = params["selector"].as_str().unwrap_or_default();
            let tag = selector.trim_end_matches("[class]");
            let ids: Vec<i64> = nodes
                .lock()
                .iter()
                .filter(|n| n.tag == tag && n.class_name.is_some())
                .map(|n| n.id)
                .collect();
            Ok(json!({"nodeIds": ids}))
        }
        "DOM.getAttributes" => {
            let id = params["nodeId"].as_i64().unwrap_or_default();
            let nodes = nodes.lock();
            let node = nodes
                .iter()
                .find(|n| n.id == id)
                .ok_or("Could not find node with given id")?;
            let attributes = match &node.class_name {
                Some(class_name) => json!(["class", class_name]),
                None => json!([]),
            };
            Ok(json!({"attributes": attributes}))
        }
        "DOM.setAttributeValue" => {
            let id = params["nodeId"].as_i64().unwrap_or_default();
            let mut nodes = nodes.lock();
            let node = nodes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or("Could not find node with given id")?;
            node.class_name = params["value"].as_str().map(str::to_string);
            Ok(json!({}))
        }
        other => Err(format!("'{}' wasn't found", other)),
    }
}
