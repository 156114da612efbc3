// src/aggregate/parallel.rs
//! Sharded aggregation on the rayon pool.
//!
//! The input is cut into contiguous shards, each folded into its own
//! [`TopicTable`] with global positions, then the tables are merged and the
//! best topic is recomputed. The answer matches the sequential fold.

use super::{aggregate_report, TopicAggregator, TopicTable};
use crate::error::Result;
use crate::types::{HotTopicReport, RunStats, VideoRecord};
use rayon::prelude::*;
use tracing::debug;

/// Aggregates `videos` across up to `shards` workers.
///
/// One shard (or a tiny input) runs the sequential fold directly.
///
/// # Errors
/// Returns the error of the earliest failing record in input order.
pub fn aggregate_sharded(videos: &[VideoRecord], shards: usize) -> Result<HotTopicReport> {
    if shards <= 1 || videos.len() < 2 {
        return aggregate_report(videos);
    }

    let shards = shards.min(videos.len());
    let chunk_len = (videos.len() + shards - 1) / shards;
    debug!(shards, chunk_len, videos = videos.len(), "sharded aggregation");

    let partials: Vec<Result<TopicTable>> = videos
        .par_chunks(chunk_len)
        .enumerate()
        .map(|(i, chunk)| fold_shard(i * chunk_len, chunk))
        .collect();

    let mut merged = TopicTable::new();
    for partial in partials {
        merged = merged.merge(partial?)?;
    }

    Ok(HotTopicReport {
        best: merged.best().cloned(),
        stats: RunStats {
            videos: merged.videos(),
            pairs: merged.pairs(),
            topics: merged.len(),
        },
    })
}

fn fold_shard(offset: usize, chunk: &[VideoRecord]) -> Result<TopicTable> {
    let mut aggregator = TopicAggregator::starting_at(offset);
    aggregator.extend(chunk)?;
    Ok(aggregator.into_table())
}
