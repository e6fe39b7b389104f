use crate::Ranked;

use chrono::{DateTime, Utc};

const MAX_AGE_DAYS: i64 = 365;
const AGE_DIVISOR: f64 = 10.0;

// First match wins; "high-critical" is critical, not high.
const PRIORITY_CASCADE: [(&[&str], f64); 4] = [
    (&["critical"], 100.0),
    (&["high"], 75.0),
    (&["major"], 50.0),
    (&["medium", "normal"], 25.0),
];

/// Anything that can be ranked by criticality
pub trait Criticality {
    fn priority_label(&self) -> Option<String>;
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

/// Priority contribution of a label, by case-insensitive substring
pub fn priority_weight(label: Option<&str>) -> f64 {
    let Some(label) = label else {
        return 0.0;
    };
    let label = label.to_lowercase();

    PRIORITY_CASCADE
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| label.contains(needle)))
        .map_or(0.0, |(_, weight)| *weight)
}

/// Priority weight plus whole days of age (capped at 365) divided by ten.
///
/// A missing or future `created_at` contributes no age.
pub fn score(priority: Option<&str>, created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let age_days = created_at
        .map(|created| (now - created).num_days().clamp(0, MAX_AGE_DAYS))
        .unwrap_or(0);

    priority_weight(priority) + age_days as f64 / AGE_DIVISOR
}

/// Score every item and order by descending score; ties keep input order.
pub fn rank_by_criticality<T: Criticality>(items: Vec<T>, now: DateTime<Utc>) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| {
            let score = score(item.priority_label().as_deref(), item.created_at(), now);
            Ranked { item, score }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
