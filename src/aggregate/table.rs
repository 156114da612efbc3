// src/aggregate/table.rs
//! Per-topic accumulator shared by the sequential fold and the sharded path.

use crate::error::{HotTopicError, Result};
use crate::types::{TopicAggregate, VideoRecord};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Where a (video, topic) pair sits in processing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub video: usize,
    pub slot: usize,
}

impl Position {
    #[must_use]
    pub fn new(video: usize, slot: usize) -> Self {
        Self { video, slot }
    }
}

#[derive(Debug, Clone)]
struct TopicEntry {
    aggregate: TopicAggregate,
    /// First position at which `views_count` held its current value.
    settled_at: Position,
}

impl TopicEntry {
    fn new(id: &str, at: Position) -> Self {
        Self {
            aggregate: TopicAggregate::new(id),
            settled_at: at,
        }
    }

    fn absorb(&mut self, other: TopicEntry) -> Result<()> {
        let mine = self.aggregate.views_count > 0;
        let theirs = other.aggregate.views_count > 0;
        self.settled_at = match (mine, theirs) {
            (false, false) => self.settled_at.min(other.settled_at),
            (true, false) => self.settled_at,
            (false, true) => other.settled_at,
            (true, true) => self.settled_at.max(other.settled_at),
        };

        let a = &mut self.aggregate;
        let b = other.aggregate;
        a.views_count = checked(&a.id, "views_count", a.views_count, b.views_count)?;
        a.likes_count = checked(&a.id, "likes_count", a.likes_count, b.likes_count)?;
        a.dislikes_count = checked(&a.id, "dislikes_count", a.dislikes_count, b.dislikes_count)?;
        a.video_ids.extend(b.video_ids);
        Ok(())
    }
}

fn checked(topic: &str, field: &'static str, a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or_else(|| HotTopicError::CounterOverflow {
        topic: topic.to_string(),
        field,
    })
}

/// Topic id to running totals, plus the bookkeeping needed to rank them.
#[derive(Debug, Clone, Default)]
pub struct TopicTable {
    entries: HashMap<String, TopicEntry>,
    videos: usize,
    pairs: usize,
}

impl TopicTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one (video, topic) contribution and returns the updated totals.
    ///
    /// # Errors
    /// Returns `CounterOverflow` if any counter would exceed `u64::MAX`.
    pub fn add(
        &mut self,
        topic_id: &str,
        video: &VideoRecord,
        at: Position,
    ) -> Result<&TopicAggregate> {
        let entry = self
            .entries
            .entry(topic_id.to_string())
            .or_insert_with(|| TopicEntry::new(topic_id, at));

        let agg = &entry.aggregate;
        let views = checked(topic_id, "views_count", agg.views_count, video.views_count)?;
        let likes = checked(topic_id, "likes_count", agg.likes_count, video.likes_count)?;
        let dislikes = checked(
            topic_id,
            "dislikes_count",
            agg.dislikes_count,
            video.dislikes_count,
        )?;

        if video.views_count > 0 {
            entry.settled_at = at;
        }
        let agg = &mut entry.aggregate;
        agg.views_count = views;
        agg.likes_count = likes;
        agg.dislikes_count = dislikes;
        agg.video_ids.insert(video.id.clone());

        self.pairs += 1;
        Ok(&entry.aggregate)
    }

    /// Counts one processed video, whether or not it carried topics.
    pub fn note_video(&mut self) {
        self.videos += 1;
    }

    #[must_use]
    pub fn get(&self, topic_id: &str) -> Option<&TopicAggregate> {
        self.entries.get(topic_id).map(|e| &e.aggregate)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn videos(&self) -> usize {
        self.videos
    }

    #[must_use]
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicAggregate> {
        self.entries.values().map(|e| &e.aggregate)
    }

    /// Highest `views_count`; on a tie, the topic that reached it first.
    #[must_use]
    pub fn best(&self) -> Option<&TopicAggregate> {
        self.entries
            .values()
            .max_by(|a, b| rank(a, b))
            .map(|e| &e.aggregate)
    }

    /// Combines two partial tables built from disjoint slices of one input.
    ///
    /// Positions must be global to the input so that `best` still resolves
    /// ties the way the sequential fold does.
    ///
    /// # Errors
    /// Returns `CounterOverflow` if a merged counter exceeds `u64::MAX`.
    pub fn merge(mut self, other: TopicTable) -> Result<TopicTable> {
        for (id, theirs) in other.entries {
            match self.entries.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(theirs);
                }
                Entry::Occupied(mut slot) => slot.get_mut().absorb(theirs)?,
            }
        }
        self.videos += other.videos;
        self.pairs += other.pairs;
        Ok(self)
    }

    #[must_use]
    pub fn into_topics(self) -> HashMap<String, TopicAggregate> {
        self.entries
            .into_iter()
            .map(|(id, e)| (id, e.aggregate))
            .collect()
    }
}

fn rank(a: &TopicEntry, b: &TopicEntry) -> Ordering {
    a.aggregate
        .views_count
        .cmp(&b.aggregate.views_count)
        .then_with(|| b.settled_at.cmp(&a.settled_at))
}
