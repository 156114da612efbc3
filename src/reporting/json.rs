use crate::error::Result;
use crate::types::HotTopicReport;

/// Pretty-printed JSON of the report (`best` is `null` when no topic was found).
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &HotTopicReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Prints the JSON report to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_report(report: &HotTopicReport) -> Result<()> {
    println!("{}", render(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RunStats, TopicAggregate};
    use serde_json::Value;

    #[test]
    fn best_and_stats_are_serialized() {
        let mut t = TopicAggregate::new("t1");
        t.views_count = 10;
        t.video_ids.insert("v1".into());
        let report = HotTopicReport {
            best: Some(t),
            stats: RunStats { videos: 1, pairs: 1, topics: 1 },
        };
        let v: Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(v["best"]["id"], "t1");
        assert_eq!(v["best"]["views_count"], 10);
        assert_eq!(v["best"]["video_ids"][0], "v1");
        assert_eq!(v["stats"]["pairs"], 1);
    }

    #[test]
    fn missing_topic_is_null() {
        let report = HotTopicReport { best: None, stats: RunStats::default() };
        let v: Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert!(v["best"].is_null());
    }
}
