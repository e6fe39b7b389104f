use serde::Serialize;

/// An item with its criticality score; serializes as the item's own fields
/// plus `score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    pub score: f64,
}
