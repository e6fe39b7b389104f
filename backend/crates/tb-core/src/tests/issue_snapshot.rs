use crate::IssueSnapshot;

use serde_json::json;

fn snapshot() -> IssueSnapshot {
    serde_json::from_value(json!({
        "id": "3-42",
        "idReadable": "PROJ-42",
        "customFields": [
            {"name": "Priority", "value": {"name": "Critical", "id": "5-1"}},
            {"name": "Assignee", "value": {"login": "jdoe"}},
            {"name": "Sprint", "value": {"id": "9-9"}},
            {"name": "Blank", "value": {"name": "", "id": "1-1"}},
            {"name": "Estimate", "value": 3},
            {"name": "Unset", "value": null}
        ],
        "links": [
            {
                "direction": "BOTH",
                "linkType": {"name": "Relates"},
                "issues": [{"id": "3-7", "idReadable": " PROJ-7 "}]
            },
            {
                "direction": "OUTWARD",
                "linkType": {"name": "Depend"},
                "issues": [{"id": "4-1"}]
            }
        ]
    }))
    .unwrap()
}

#[test]
fn test_resolved_value_prefers_name_then_id_then_login() {
    let snapshot = snapshot();
    let resolved = |name: &str| snapshot.custom_field(name).and_then(|f| f.resolved_value());

    assert_eq!(resolved("Priority").as_deref(), Some("Critical"));
    assert_eq!(resolved("Assignee").as_deref(), Some("jdoe"));
    assert_eq!(resolved("Sprint").as_deref(), Some("9-9"));
    assert_eq!(resolved("Blank").as_deref(), Some(""));
    assert_eq!(resolved("Estimate"), None);
    assert_eq!(resolved("Unset"), None);
    assert_eq!(resolved("Missing"), None);
}

#[test]
fn test_has_link_to_matches_readable_or_internal_id() {
    let snapshot = snapshot();

    assert!(snapshot.has_link_to("PROJ-7"));
    assert!(snapshot.has_link_to("  PROJ-7"));
    assert!(snapshot.has_link_to("3-7"));
    assert!(snapshot.has_link_to("4-1"));
    assert!(!snapshot.has_link_to("PROJ-8"));
}

#[test]
fn test_missing_sections_are_empty() {
    let snapshot: IssueSnapshot = serde_json::from_value(json!({"idReadable": "PROJ-1"})).unwrap();

    assert!(snapshot.custom_field("Priority").is_none());
    assert!(!snapshot.has_link_to("PROJ-2"));
}
