//! Page DOM access through the CDP DOM domain.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use tabfix_protocols::error::ToolError;
use tabfix_protocols::page::{ElementClass, ElementHandle, PageDom};

use crate::cdp::{CdpError, DomNode, PageSession, attribute_value};

/// [`PageDom`] over an attached page session.
///
/// Element handles are CDP node ids, valid until the next
/// `DOM.getDocument` on the session.
pub struct CdpDom {
    session: PageSession,
}

impl CdpDom {
    pub fn new(session: PageSession) -> Self {
        Self { session }
    }

    async fn document(&self) -> Result<DomNode, CdpError> {
        let result = self
            .session
            .call("DOM.getDocument", Some(json!({"depth": 0})))
            .await?;
        Ok(serde_json::from_value(result["root"].clone())?)
    }

    async fn query_selector_all(&self, root: i64, selector: &str) -> Result<Vec<i64>, CdpError> {
        let result = self
            .session
            .call(
                "DOM.querySelectorAll",
                Some(json!({"nodeId": root, "selector": selector})),
            )
            .await?;

        Ok(result["nodeIds"]
            .as_array()
            .map(|ids| ids.iter().filter_map(|v| v.as_i64()).collect())
            .unwrap_or_default())
    }

    async fn class_attribute(&self, node_id: i64) -> Result<Option<String>, CdpError> {
        let result = self
            .session
            .call("DOM.getAttributes", Some(json!({"nodeId": node_id})))
            .await?;
        let attributes: Vec<String> = serde_json::from_value(result["attributes"].clone())?;
        Ok(attribute_value(&attributes, "class").map(str::to_string))
    }
}

fn dom_error(e: CdpError) -> ToolError {
    ToolError::Dom(e.to_string())
}

#[async_trait]
impl PageDom for CdpDom {
    async fn elements_with_class(&self, tag: &str) -> Result<Vec<ElementClass>, ToolError> {
        let root = self.document().await.map_err(dom_error)?;
        let selector = format!("{}[class]", tag);
        let node_ids = self
            .query_selector_all(root.node_id, &selector)
            .await
            .map_err(dom_error)?;
        debug!("{} matched {} nodes in {}", selector, node_ids.len(), self.session.target_id());

        let mut elements = Vec::with_capacity(node_ids.len());
        for node_id in node_ids {
            if let Some(class_name) = self.class_attribute(node_id).await.map_err(dom_error)? {
                elements.push(ElementClass {
                    handle: ElementHandle(node_id),
                    class_name,
                });
            }
        }
        Ok(elements)
    }

    async fn set_class(&self, element: ElementHandle, class_name: &str) -> Result<(), ToolError> {
        self.session
            .call(
                "DOM.setAttributeValue",
                Some(json!({"nodeId": element.0, "name": "class", "value": class_name})),
            )
            .await
            .map_err(dom_error)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
