// src/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single video as supplied by the record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub views_count: u64,
    pub likes_count: u64,
    pub dislikes_count: u64,
    pub topic_ids: Vec<String>,
}

impl VideoRecord {
    /// Creates a record with the given counters and topics.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        views_count: u64,
        likes_count: u64,
        dislikes_count: u64,
        topic_ids: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            views_count,
            likes_count,
            dislikes_count,
            topic_ids: topic_ids.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// Running totals for one topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAggregate {
    pub id: String,
    pub views_count: u64,
    pub likes_count: u64,
    pub dislikes_count: u64,
    pub video_ids: BTreeSet<String>,
}

impl TopicAggregate {
    /// Creates a zeroed aggregate for `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Number of distinct videos that contributed to this topic.
    #[must_use]
    pub fn video_count(&self) -> usize {
        self.video_ids.len()
    }
}

/// Counters describing one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub videos: usize,
    pub pairs: usize,
    pub topics: usize,
}

/// The outcome handed to result consumers.
#[derive(Debug, Clone, Serialize)]
pub struct HotTopicReport {
    pub best: Option<TopicAggregate>,
    pub stats: RunStats,
}

impl HotTopicReport {
    /// Returns true when at least one topic was found.
    #[must_use]
    pub fn has_topic(&self) -> bool {
        self.best.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_aggregate_is_zeroed() {
        let t = TopicAggregate::new("t1");
        assert_eq!(t.id, "t1");
        assert_eq!(t.views_count, 0);
        assert_eq!(t.likes_count, 0);
        assert_eq!(t.dislikes_count, 0);
        assert_eq!(t.video_count(), 0);
    }

    #[test]
    fn record_constructor_copies_topics() {
        let v = VideoRecord::new("v1", 3, 2, 1, &["a", "b"]);
        assert_eq!(v.topic_ids, vec!["a".to_string(), "b".to_string()]);
    }
}
