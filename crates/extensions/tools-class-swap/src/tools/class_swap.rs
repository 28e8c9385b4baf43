//! Class swap tool.

use async_trait::async_trait;
use tracing::{debug, warn};

use tabfix_config::ClassSwapSpec;
use tabfix_protocols::error::ToolError;
use tabfix_protocols::page::{ElementClass, PageDom};
use tabfix_protocols::payload::OriginalClasses;
use tabfix_protocols::tool::{OperationResult, PageTool, ToolDefinition};

const NO_MATCHES: &str = "No matching elements found on this page.";
const NOTHING_RESTORED: &str = "No elements to restore.";

/// Overwrites the class of marked elements with a fixed class string.
pub struct ClassSwapTool {
    definition: ToolDefinition,
    element: String,
    marker: String,
    target_class: String,
    noun: String,
}

impl ClassSwapTool {
    pub fn new(spec: &ClassSwapSpec) -> Self {
        let mut definition = ToolDefinition::new(&spec.id, &spec.name, &spec.description);
        if let Some(icon) = &spec.icon {
            definition = definition.with_icon(icon);
        }

        Self {
            definition,
            element: spec.element.clone(),
            marker: spec.marker.clone(),
            target_class: spec.target_class.clone(),
            noun: spec.noun.clone(),
        }
    }

    /// The built-in table layout fixer.
    pub fn css_fixer() -> Self {
        Self::new(&ClassSwapSpec::css_fixer())
    }

    fn is_swapped(&self, element: &ElementClass) -> bool {
        self.target_class
            .split_whitespace()
            .all(|token| element.has_token(token))
    }

    /// Put back the recorded classes of elements already overwritten.
    async fn roll_back(&self, dom: &dyn PageDom, written: &[ElementClass]) {
        for element in written {
            if let Err(e) = dom.set_class(element.handle, &element.class_name).await {
                warn!(
                    "{}: could not restore \"{}\": {}",
                    self.definition.id, element.class_name, e
                );
            }
        }
    }

    fn applied_message(&self, count: usize) -> String {
        if count == 1 {
            format!("Fixed {} {}!", count, self.noun)
        } else {
            format!("Fixed {} {}s!", count, self.noun)
        }
    }
}

fn restored_message(count: usize) -> String {
    match count {
        0 => NOTHING_RESTORED.to_string(),
        1 => "Restored 1 element!".to_string(),
        n => format!("Restored {} elements!", n),
    }
}

#[async_trait]
impl PageTool for ClassSwapTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn apply(&self, dom: &dyn PageDom) -> Result<OperationResult, ToolError> {
        let matched: Vec<ElementClass> = dom
            .elements_with_class(&self.element)
            .await?
            .into_iter()
            .filter(|element| element.has_token(&self.marker))
            .collect();

        if matched.is_empty() {
            debug!("{}: no element carries {}", self.definition.id, self.marker);
            return Ok(OperationResult::success(0, NO_MATCHES));
        }

        // Record everything before the first write.
        let original: OriginalClasses = matched
            .iter()
            .enumerate()
            .map(|(index, element)| (index, element.class_name.clone()))
            .collect();

        for (written, element) in matched.iter().enumerate() {
            if let Err(e) = dom.set_class(element.handle, &self.target_class).await {
                self.roll_back(dom, &matched[..written]).await;
                return Err(e);
            }
        }

        Ok(OperationResult::applied(
            self.applied_message(matched.len()),
            original,
        ))
    }

    async fn undo(
        &self,
        dom: &dyn PageDom,
        original: &OriginalClasses,
    ) -> Result<OperationResult, ToolError> {
        let swapped: Vec<ElementClass> = dom
            .elements_with_class(&self.element)
            .await?
            .into_iter()
            .filter(|element| self.is_swapped(element))
            .collect();

        let mut restored = 0;
        for (index, class_name) in original.iter() {
            let Some(element) = swapped.get(index) else {
                debug!("{}: element {} is gone", self.definition.id, index);
                continue;
            };
            dom.set_class(element.handle, class_name).await?;
            restored += 1;
        }

        Ok(OperationResult::success(restored, restored_message(restored)))
    }
}

#[cfg(test)]
#[path = "class_swap_tests.rs"]
mod tests;
