use crate::BulkOrchestrator;
use crate::tests::fake_tracker::{Call, FakeTracker};

use tb_core::{CriticalityInput, IssueSummary};

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap()
}

#[test]
fn test_rank_by_criticality_orders_caller_items() {
    let orchestrator = BulkOrchestrator::new(Arc::new(FakeTracker::new()));
    let items: Vec<CriticalityInput> = serde_json::from_value(json!([
        {"id": "low", "priority": "Minor", "createdAt": "2026-10-07T00:00:00Z"},
        {"id": "top", "priority": "Critical", "createdAt": "2026-10-16T00:00:00Z"},
        {"id": "mid", "priority": "High", "createdAt": "2026-09-07T00:00:00Z"}
    ]))
    .unwrap();

    let ranked = orchestrator.rank_by_criticality(items, now());

    let order: Vec<&str> = ranked
        .iter()
        .map(|r| r.item.extra["id"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["top", "mid", "low"]);
    assert_eq!(ranked[1].score, 79.0);
}

#[tokio::test]
async fn test_rank_search_scores_search_hits_and_truncates() {
    let hits: Vec<IssueSummary> = serde_json::from_value(json!([
        {"idReadable": "PROJ-1", "created": 1791936000000i64},
        {"idReadable": "PROJ-2", "created": 1791936000000i64,
         "customFields": [{"name": "Priority", "value": {"name": "Critical"}}]},
        {"idReadable": "PROJ-3", "created": 1791936000000i64,
         "customFields": [{"name": "Priority", "value": {"name": "Major"}}]}
    ]))
    .unwrap();
    let tracker = Arc::new(FakeTracker::new().with_search_results(hits));

    let ranked = BulkOrchestrator::new(tracker.clone())
        .rank_search("#Unresolved", 2, now())
        .await
        .unwrap();

    let order: Vec<&str> = ranked
        .iter()
        .map(|r| r.item.id_readable.as_deref().unwrap())
        .collect();
    assert_eq!(order, vec!["PROJ-2", "PROJ-3"]);
    assert_eq!(
        tracker.calls(),
        vec![Call::Search {
            query: "#Unresolved".to_string(),
            top: 2
        }]
    );
}
