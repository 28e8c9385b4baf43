use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage.namespace, "tabfix_data");
    assert_eq!(config.storage.active_key, "active_tool");
    assert_eq!(config.browser.endpoint, "http://127.0.0.1:9222");
    assert_eq!(config.browser.call_timeout_seconds, 30);
    assert_eq!(config.shortcuts.run, "trigger-update");
    assert_eq!(config.shortcuts.undo.as_deref(), Some("trigger-undo"));
}

#[test]
fn test_default_catalog_holds_css_fixer() {
    let tools = ToolsConfig::default();
    assert_eq!(tools.default, CSS_FIXER_ID);
    assert_eq!(tools.catalog.len(), 1);

    let ToolSpec::ClassSwap(spec) = tools.find(CSS_FIXER_ID).unwrap();
    assert_eq!(spec.element, "div");
    assert_eq!(spec.marker, "w-[100cqw]");
    assert_eq!(
        spec.target_class,
        "pointer-events-none flex justify-center *:pointer-events-auto"
    );
}

#[test]
fn test_find_unknown_tool() {
    assert!(ToolsConfig::default().find("dark_mode").is_none());
}

#[test]
fn test_resolved_path_expands_tilde() {
    let storage = StorageConfig::default();
    let path = storage.resolved_path();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with(".tabfix/storage.json"));
}

#[test]
fn test_tool_spec_tagged_by_kind() {
    let spec = ToolSpec::ClassSwap(ClassSwapSpec::css_fixer());
    let value = toml::Value::try_from(&spec).unwrap();
    assert_eq!(value.get("kind").and_then(|k| k.as_str()), Some("class_swap"));
    assert_eq!(value.get("id").and_then(|k| k.as_str()), Some(CSS_FIXER_ID));
}

#[test]
fn test_tabfix_dir_name() {
    assert!(tabfix_dir().ends_with(".tabfix"));
}
