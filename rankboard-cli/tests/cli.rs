//! Exit status and stdout of the `rankboard` binary.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const ENTRY_LOG: &str = "\
create_timestamp,player_id,handle_name
2024-01-01 00:00:00,p1,Alice
2024-01-01 00:00:01,p2,Bob
2024-01-01 00:00:02,p3,Carol
";

const SCORE_LOG: &str = "\
create_timestamp,player_id,score
2024-01-02 10:00:00,p1,100
2024-01-02 11:00:00,p1,150
2024-01-02 12:00:00,p2,150
2024-01-02 13:00:00,p3,90
2024-01-02 14:00:00,p3,110
";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("entry.csv"), ENTRY_LOG).unwrap();
        std::fs::write(dir.path().join("score.csv"), SCORE_LOG).unwrap();
        Fixture { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run the binary inside the fixture dir, isolated from any real user config.
    fn run(&self, args: &[&str]) -> Output {
        let config = self.path("no-config.toml");
        Command::new(env!("CARGO_BIN_EXE_rankboard"))
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .args(args)
            .arg("--config")
            .arg(&config)
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn assert_failed(output: &Output) {
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(output));
    assert!(stdout(output).is_empty(), "unexpected stdout: {}", stdout(output));
}

#[test]
fn test_highscore_succeeds() {
    let fx = Fixture::new();
    let output = fx.run(&["entry.csv", "score.csv"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "rank,player_id,handle_name,score\n1,p1,Alice,150\n1,p2,Bob,150\n3,p3,Carol,110\n"
    );
}

#[test]
fn test_average_with_min_plays_succeeds() {
    let fx = Fixture::new();
    let output = fx.run(&["average", "entry.csv", "score.csv", "--min-plays", "2"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "rank,player_id,handle_name,score\n1,p1,Alice,125\n2,p3,Carol,100\n"
    );
}

#[test]
fn test_top_flag_keeps_tie_whole() {
    let fx = Fixture::new();
    let output = fx.run(&["highscore", "entry.csv", "score.csv", "--top", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "rank,player_id,handle_name,score\n1,p1,Alice,150\n1,p2,Bob,150\n");
}

#[test]
fn test_bad_argument_count_exits_one() {
    let fx = Fixture::new();
    assert_failed(&fx.run(&[]));
    assert_failed(&fx.run(&["entry.csv"]));
    assert_failed(&fx.run(&["highscore", "entry.csv", "score.csv", "extra.csv"]));
}

#[test]
fn test_invalid_mode_exits_one() {
    let fx = Fixture::new();
    let output = fx.run(&["median", "entry.csv", "score.csv"]);
    assert_failed(&output);
    assert!(stderr(&output).starts_with("Error: "));
}

#[test]
fn test_unknown_flag_exits_one() {
    let fx = Fixture::new();
    assert_failed(&fx.run(&["entry.csv", "score.csv", "--bogus"]));
}

#[test]
fn test_missing_file_exits_one() {
    let fx = Fixture::new();
    assert_failed(&fx.run(&["entry.csv", "nope.csv"]));
    assert_failed(&fx.run(&["nope.csv", "score.csv"]));
}

#[test]
fn test_validation_failure_exits_one_without_output() {
    let fx = Fixture::new();
    fx.write(
        "bad_score.csv",
        "create_timestamp,player_id,score\n2024-01-02 10:00:00,p1,12.5\n",
    );
    let output = fx.run(&["entry.csv", "bad_score.csv"]);
    assert_failed(&output);
    assert!(stderr(&output).starts_with("Error: "));
}

#[test]
fn test_bad_config_is_not_read_before_logs_fail() {
    let fx = Fixture::new();
    // A broken config file is never consulted when an input log is missing.
    let config = fx.write("broken.toml", "ranking_threshold = \"ten\"\n");
    let output = Command::new(env!("CARGO_BIN_EXE_rankboard"))
        .current_dir(fx.dir.path())
        .env("HOME", fx.dir.path())
        .args(["entry.csv", "nope.csv", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert_failed(&output);
    assert!(stderr(&output).contains("nope.csv"), "stderr: {}", stderr(&output));
}

#[test]
fn test_help_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_rankboard"))
        .arg("--help")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).is_empty());
}

#[test]
fn test_entry_log_named_init_with_path_prefix() {
    let fx = Fixture::new();
    fx.write("init", ENTRY_LOG);
    let output = fx.run(&["./init", "score.csv"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("rank,player_id,handle_name,score\n1,p1,Alice,150\n"));
}

#[test]
fn test_init_creates_config_once() {
    let fx = Fixture::new();
    let config = fx.path("nested").join("config.toml");
    let init = |path: &Path| {
        Command::new(env!("CARGO_BIN_EXE_rankboard"))
            .env("HOME", fx.dir.path())
            .arg("init")
            .arg("--config")
            .arg(path)
            .output()
            .unwrap()
    };

    let first = init(&config);
    assert_eq!(first.status.code(), Some(0), "stderr: {}", stderr(&first));
    assert!(config.exists());

    let second = init(&config);
    assert_eq!(second.status.code(), Some(1));
}
