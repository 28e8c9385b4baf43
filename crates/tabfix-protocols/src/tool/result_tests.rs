use super::*;

#[test]
fn test_applied_with_matches_keeps_state() {
    let original: OriginalClasses = [(0, "w-[100cqw] a".to_string())].into_iter().collect();
    let result = OperationResult::applied("Fixed 1 table element!", original);
    assert!(result.success);
    assert_eq!(result.count, 1);
    assert_eq!(result.undo_state().unwrap().len(), 1);
}

#[test]
fn test_applied_without_matches_drops_state() {
    let result = OperationResult::applied(
        "No matching elements found on this page.",
        OriginalClasses::new(),
    );
    assert!(result.success);
    assert_eq!(result.count, 0);
    assert!(result.original_classes.is_none());
    assert!(result.undo_state().is_none());
}

#[test]
fn test_undo_state_ignores_empty_mapping() {
    let result = OperationResult {
        success: true,
        count: 0,
        message: String::new(),
        original_classes: Some(OriginalClasses::new()),
    };
    assert!(result.undo_state().is_none());
}

#[test]
fn test_nothing_to_restore() {
    let result = OperationResult::nothing_to_restore();
    assert!(result.success);
    assert_eq!(result.count, 0);
    assert_eq!(result.message, NO_DATA_TO_RESTORE);
}

#[test]
fn test_failure() {
    let result = OperationResult::failure("No active tab found.");
    assert!(!result.success);
    assert_eq!(result.count, 0);
}

#[test]
fn test_serialization_uses_camel_case() {
    let original: OriginalClasses = [(0, "a".to_string())].into_iter().collect();
    let result = OperationResult::applied("ok", original);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["originalClasses"]["el-0"], "a");
    assert_eq!(json["count"], 1);
}

#[test]
fn test_serialization_omits_missing_state() {
    let json = serde_json::to_value(OperationResult::success(2, "Restored 2 elements!")).unwrap();
    assert!(json.get("originalClasses").is_none());
}

#[test]
fn test_deserialize_minimal() {
    let result: OperationResult = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!result.success);
    assert_eq!(result.count, 0);
    assert!(result.message.is_empty());
}
