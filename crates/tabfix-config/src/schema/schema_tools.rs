//! Tool catalog configuration.

use serde::{Deserialize, Serialize};

/// Id of the built-in tool.
pub const CSS_FIXER_ID: &str = "css_fixer";

/// Tool catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Active tool until the user picks another one.
    #[serde(default = "default_tool")]
    pub default: String,

    #[serde(default = "default_catalog")]
    pub catalog: Vec<ToolSpec>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default: default_tool(),
            catalog: default_catalog(),
        }
    }
}

impl ToolsConfig {
    pub fn find(&self, id: &str) -> Option<&ToolSpec> {
        self.catalog.iter().find(|spec| spec.id() == id)
    }
}

fn default_tool() -> String {
    CSS_FIXER_ID.to_string()
}

fn default_catalog() -> Vec<ToolSpec> {
    vec![ToolSpec::ClassSwap(ClassSwapSpec::css_fixer())]
}

/// A tool entry, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolSpec {
    ClassSwap(ClassSwapSpec),
}

impl ToolSpec {
    pub fn id(&self) -> &str {
        match self {
            ToolSpec::ClassSwap(spec) => &spec.id,
        }
    }
}

/// Replace the class attribute of every marked element with a fixed class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSwapSpec {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Tag of candidate elements.
    #[serde(default = "default_element")]
    pub element: String,

    /// Class token that marks an element as eligible.
    pub marker: String,

    /// Class string written to matched elements.
    pub target_class: String,

    /// What a matched element is called in status messages.
    #[serde(default = "default_noun")]
    pub noun: String,
}

impl ClassSwapSpec {
    /// The built-in table layout fixer.
    pub fn css_fixer() -> Self {
        Self {
            id: CSS_FIXER_ID.to_string(),
            name: "CSS Table Fixer".to_string(),
            description: "Fixes table layout issues by updating class attributes".to_string(),
            icon: Some("table_icon.svg".to_string()),
            element: default_element(),
            marker: "w-[100cqw]".to_string(),
            target_class: "pointer-events-none flex justify-center *:pointer-events-auto"
                .to_string(),
            noun: "table element".to_string(),
        }
    }
}

fn default_element() -> String {
    "div".to_string()
}

fn default_noun() -> String {
    "element".to_string()
}
