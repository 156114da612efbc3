// tests/cli_run.rs - End-to-end runs through the CLI handlers
use clap::Parser;
use hottopic_core::cli::{self, Cli};
use hottopic_core::config::{Config, OutputFormat};
use hottopic_core::exit::HotTopicExit;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VIDEOS: &str = r#"[
  {"id": "v1", "views_count": 10, "likes_count": 1, "dislikes_count": 0, "topic_ids": ["t1"]},
  {"id": "v2", "views_count": 20, "likes_count": 2, "dislikes_count": 1, "topic_ids": ["t1", "t2"]},
  {"id": "v3", "views_count": 25, "likes_count": 0, "dislikes_count": 3, "topic_ids": ["t2"]}
]"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn config_for(input: &Path) -> Config {
    let mut c = Config::new();
    c.input = input.to_path_buf();
    c.output.color = false;
    c
}

#[test]
fn test_compute_finds_hot_topic() {
    let d = tempfile::tempdir().unwrap();
    let input = write(&d, "videos.json", VIDEOS);
    let report = cli::compute(&config_for(&input)).unwrap();
    let best = report.best.unwrap();
    assert_eq!(best.id, "t2");
    assert_eq!(best.views_count, 45);
    assert_eq!(best.video_ids.len(), 2);
}

#[test]
fn test_exit_success() {
    let d = tempfile::tempdir().unwrap();
    let input = write(&d, "videos.json", VIDEOS);
    let exit = cli::handle_run(&config_for(&input)).unwrap();
    assert_eq!(exit, HotTopicExit::Success);
}

#[test]
fn test_exit_no_topic() {
    let d = tempfile::tempdir().unwrap();
    let input = write(&d, "videos.json", "[]");
    let exit = cli::handle_run(&config_for(&input)).unwrap();
    assert_eq!(exit, HotTopicExit::NoTopic);
}

#[test]
fn test_exit_invalid_input() {
    let d = tempfile::tempdir().unwrap();
    let input = write(
        &d,
        "videos.json",
        r#"[{"id": "v1", "views_count": -1, "likes_count": 0, "dislikes_count": 0, "topic_ids": []}]"#,
    );
    let exit = cli::handle_run(&config_for(&input)).unwrap();
    assert_eq!(exit, HotTopicExit::InvalidInput);
}

#[test]
fn test_missing_input_is_error() {
    let d = tempfile::tempdir().unwrap();
    let config = config_for(&d.path().join("missing.json"));
    assert!(cli::handle_run(&config).is_err());
}

#[test]
fn test_json_output_and_shards() {
    let d = tempfile::tempdir().unwrap();
    let input = write(&d, "videos.json", VIDEOS);
    let mut config = config_for(&input);
    config.output.format = OutputFormat::Json;
    config.shards = 3;
    assert_eq!(cli::handle_run(&config).unwrap(), HotTopicExit::Success);
}

#[test]
fn test_explicit_config_file_with_overrides() {
    let d = tempfile::tempdir().unwrap();
    let input = write(&d, "videos.json", VIDEOS);
    let toml = format!(
        "input = {:?}\nshards = 2\n[output]\ndetail = false\n",
        input.display().to_string()
    );
    let config_path = write(&d, "custom.toml", &toml);

    let args = [
        "hottopic",
        "--config",
        config_path.to_str().unwrap(),
        "--no-color",
        "--shards",
        "5",
    ];
    let cli = Cli::parse_from(args);
    let config = cli::resolve_config(&cli).unwrap();
    assert_eq!(config.input, input);
    assert_eq!(config.shards, 5);
    assert!(!config.output.detail);
    assert!(!config.output.color);
}

#[test]
fn test_bad_config_file_is_error() {
    let d = tempfile::tempdir().unwrap();
    let config_path = write(&d, "bad.toml", "shards = \"many\"");
    let cli = Cli::parse_from(["hottopic", "--config", config_path.to_str().unwrap()]);
    assert!(cli::resolve_config(&cli).is_err());
}
