//! Finds the most viewed topic across a collection of video records.
//!
//! The core is [`aggregate::TopicAggregator`], a single pass over every
//! (video, topic) pair that keeps per-topic totals and the current best topic.
//! File loading, configuration and console output live in their own modules
//! and never run inside the fold.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod logging;
pub mod reporting;
pub mod source;
pub mod types;

pub use aggregate::{
    aggregate, aggregate_report, aggregate_sharded, find_hot_topic, TopicAggregator,
};
pub use error::{HotTopicError, Result};
pub use types::{HotTopicReport, RunStats, TopicAggregate, VideoRecord};
