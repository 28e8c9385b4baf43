//! In-memory page document.

use async_trait::async_trait;
use parking_lot::Mutex;

use tabfix_protocols::error::ToolError;
use tabfix_protocols::page::{ElementClass, ElementHandle, PageDom};

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    class_name: Option<String>,
}

/// A flat list of elements in document order.
///
/// Handles are positions, valid until the next structural change.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: Mutex<Vec<Element>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, tag: &str, class_name: &str) -> Self {
        self.push(tag, Some(class_name));
        self
    }

    /// Add an element without a `class` attribute.
    pub fn with_bare_element(self, tag: &str) -> Self {
        self.push(tag, None);
        self
    }

    pub fn push(&self, tag: &str, class_name: Option<&str>) {
        self.elements.lock().push(Element {
            tag: tag.to_ascii_lowercase(),
            class_name: class_name.map(str::to_string),
        });
    }

    /// Remove the element at `index`, shifting later elements up.
    pub fn remove(&self, index: usize) -> bool {
        let mut elements = self.elements.lock();
        if index < elements.len() {
            elements.remove(index);
            true
        } else {
            false
        }
    }

    pub fn class_of(&self, index: usize) -> Option<String> {
        self.elements
            .lock()
            .get(index)
            .and_then(|element| element.class_name.clone())
    }

    /// Class attributes of all elements, in document order.
    pub fn classes(&self) -> Vec<Option<String>> {
        self.elements
            .lock()
            .iter()
            .map(|element| element.class_name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.lock().is_empty()
    }
}

#[async_trait]
impl PageDom for MemoryDocument {
    async fn elements_with_class(&self, tag: &str) -> Result<Vec<ElementClass>, ToolError> {
        let tag = tag.to_ascii_lowercase();
        Ok(self
            .elements
            .lock()
            .iter()
            .enumerate()
            .filter(|(_, element)| element.tag == tag)
            .filter_map(|(index, element)| {
                element.class_name.as_ref().map(|class_name| ElementClass {
                    handle: ElementHandle(index as i64),
                    class_name: class_name.clone(),
                })
            })
            .collect())
    }

    async fn set_class(&self, element: ElementHandle, class_name: &str) -> Result<(), ToolError> {
        let mut elements = self.elements.lock();
        let target = usize::try_from(element.0)
            .ok()
            .and_then(|index| elements.get_mut(index))
            .ok_or_else(|| ToolError::Dom(format!("no element with handle {}", element.0)))?;
        target.class_name = Some(class_name.to_string());
        Ok(())
    }
}
