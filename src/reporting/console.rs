//! Console output for the hot topic report.
//!
//! A summary block names the winning topic and its views; an optional detail
//! block dumps every field of the aggregate.

use crate::config::OutputConfig;
use crate::types::{HotTopicReport, RunStats, TopicAggregate};
use colored::Colorize;
use std::fmt::Write;

const WIDTH: usize = 86;

/// Prints the report to stdout.
pub fn print_report(report: &HotTopicReport, output: &OutputConfig) {
    if !output.color {
        colored::control::set_override(false);
    }
    print!("{}", render(report, output.detail));
}

/// Renders the report as it would appear on the console.
#[must_use]
pub fn render(report: &HotTopicReport, detail: bool) -> String {
    let mut out = String::new();
    match &report.best {
        Some(topic) => {
            write_summary(&mut out, topic);
            if detail {
                write_detail(&mut out, topic, &report.stats);
            }
        }
        None => write_empty(&mut out, &report.stats),
    }
    out
}

fn rule(title: &str) -> String {
    let head = format!("#-[ {title:<17}]");
    let fill = WIDTH.saturating_sub(head.chars().count());
    format!("{head}{}", "-".repeat(fill))
}

fn write_summary(out: &mut String, topic: &TopicAggregate) {
    let _ = writeln!(out, "{}", rule("Summary").cyan());
    let _ = writeln!(
        out,
        "Most viewed topic id is : {} with {} views",
        format!("'{}'", topic.id).magenta(),
        topic.views_count.to_string().magenta()
    );
    let _ = writeln!(out, "{}", "-".repeat(WIDTH).cyan());
}

fn write_detail(out: &mut String, topic: &TopicAggregate, stats: &RunStats) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule("Detailed result").cyan());
    let _ = writeln!(out, "  {:<15}: {}", "id", topic.id);
    let _ = writeln!(out, "  {:<15}: {}", "views_count", topic.views_count);
    let _ = writeln!(out, "  {:<15}: {}", "likes_count", topic.likes_count);
    let _ = writeln!(out, "  {:<15}: {}", "dislikes_count", topic.dislikes_count);
    let ids: Vec<&str> = topic.video_ids.iter().map(String::as_str).collect();
    let _ = writeln!(out, "  {:<15}: [{}]", "video_ids", ids.join(", "));
    let _ = writeln!(out, "{}", stats_line(stats).dimmed());
}

fn write_empty(out: &mut String, stats: &RunStats) {
    let _ = writeln!(out, "{}", rule("Summary").cyan());
    let _ = writeln!(out, "{}", "No topic found: no video references a topic.".yellow());
    let _ = writeln!(out, "{}", stats_line(stats).dimmed());
}

fn stats_line(stats: &RunStats) -> String {
    format!(
        "  {} videos, {} topic references, {} distinct topics",
        stats.videos, stats.pairs, stats.topics
    )
}
