// src/aggregate/mod.rs
//! Single-pass topic aggregation with online best tracking.
//!
//! Every (video, topic) pair is folded into a [`TopicTable`] in input order.
//! After each contribution the touched topic is compared against the current
//! best. The best is held by key, so later contributions to the same topic are
//! visible without re-pointing. Ties keep the topic that got there first.

pub mod parallel;
pub mod table;

pub use parallel::aggregate_sharded;
pub use table::{Position, TopicTable};

use crate::error::{HotTopicError, Result};
use crate::types::{HotTopicReport, RunStats, TopicAggregate, VideoRecord};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Folds video records into per-topic totals.
#[derive(Debug, Default)]
pub struct TopicAggregator {
    table: TopicTable,
    best: Option<String>,
    next_video: usize,
}

impl TopicAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts numbering videos at `offset`, for shards of a larger input.
    #[must_use]
    pub fn starting_at(offset: usize) -> Self {
        Self {
            next_video: offset,
            ..Self::default()
        }
    }

    /// Folds one video into the accumulator.
    ///
    /// A topic listed more than once in the same record counts once.
    ///
    /// # Errors
    /// Returns `InvalidRecord` for an empty video or topic id, and
    /// `CounterOverflow` if a topic total exceeds `u64::MAX`.
    pub fn push(&mut self, video: &VideoRecord) -> Result<()> {
        let index = self.next_video;
        validate(index, video)?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(video.topic_ids.len());
        for (slot, topic_id) in video.topic_ids.iter().enumerate() {
            if !seen.insert(topic_id.as_str()) {
                continue;
            }
            let views = self
                .table
                .add(topic_id, video, Position::new(index, slot))?
                .views_count;
            self.observe(topic_id, views);
        }

        self.table.note_video();
        self.next_video += 1;
        Ok(())
    }

    /// Folds every record in order, stopping at the first error.
    ///
    /// # Errors
    /// See [`TopicAggregator::push`].
    pub fn extend<'a, I>(&mut self, videos: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a VideoRecord>,
    {
        for video in videos {
            self.push(video)?;
        }
        Ok(())
    }

    fn observe(&mut self, topic_id: &str, views: u64) {
        let current = self
            .best
            .as_deref()
            .and_then(|id| self.table.get(id))
            .map(|b| b.views_count);

        let replace = match current {
            None => true,
            Some(best_views) => views > best_views,
        };
        if replace && self.best.as_deref() != Some(topic_id) {
            trace!(topic = topic_id, views, "best topic changed");
            self.best = Some(topic_id.to_string());
        }
    }

    /// The current best topic, reflecting every contribution so far.
    #[must_use]
    pub fn best(&self) -> Option<&TopicAggregate> {
        self.best.as_deref().and_then(|id| self.table.get(id))
    }

    #[must_use]
    pub fn table(&self) -> &TopicTable {
        &self.table
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        RunStats {
            videos: self.table.videos(),
            pairs: self.table.pairs(),
            topics: self.table.len(),
        }
    }

    /// Snapshots the best topic and the run counters.
    #[must_use]
    pub fn finish(self) -> HotTopicReport {
        HotTopicReport {
            best: self.best().cloned(),
            stats: self.stats(),
        }
    }

    #[must_use]
    pub fn into_table(self) -> TopicTable {
        self.table
    }
}

fn validate(index: usize, video: &VideoRecord) -> Result<()> {
    if video.id.is_empty() {
        return Err(HotTopicError::invalid(index, "video id is empty"));
    }
    if let Some(pos) = video.topic_ids.iter().position(String::is_empty) {
        return Err(HotTopicError::invalid(
            index,
            format!("topic id at position {pos} is empty"),
        ));
    }
    Ok(())
}

/// Aggregates `videos` and returns the most viewed topic, if any.
///
/// `None` means the input held no (video, topic) pairs.
///
/// # Errors
/// Returns the first `InvalidRecord` or `CounterOverflow` met during the fold.
pub fn aggregate(videos: &[VideoRecord]) -> Result<Option<TopicAggregate>> {
    Ok(aggregate_report(videos)?.best)
}

/// Aggregates `videos` and returns the best topic together with run counters.
///
/// # Errors
/// See [`aggregate`].
pub fn aggregate_report(videos: &[VideoRecord]) -> Result<HotTopicReport> {
    let mut aggregator = TopicAggregator::new();
    aggregator.extend(videos)?;
    let report = aggregator.finish();
    debug!(
        videos = report.stats.videos,
        pairs = report.stats.pairs,
        topics = report.stats.topics,
        "aggregation finished"
    );
    Ok(report)
}

/// Like [`aggregate`], but treats "no topic" as an error.
///
/// # Errors
/// Returns `EmptyResult` when no topic was found, otherwise see [`aggregate`].
pub fn find_hot_topic(videos: &[VideoRecord]) -> Result<TopicAggregate> {
    aggregate(videos)?.ok_or(HotTopicError::EmptyResult)
}
