//! Integration tests for the sfidenum binary.
//!
//! These tests run the real executable in a scratch working directory and
//! verify exit statuses, stdout purity and output file contents.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use regex::Regex;
use tempfile::TempDir;

use sfid_enum::domain::{MAX_COUNTER, Prefix};
use sfid_enum::service::compose;

const ID18: &str = "001Vc00000PHoN1IAL";
const ID15: &str = "001Vc00000PHoN1";
const COUNTER: i64 = 373_653_603;

// ============================================================================
// Test Harness
// ============================================================================

/// Scratch directory the binary runs in.
struct TestCli {
    dir: TempDir,
}

impl TestCli {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sfidenum"));
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("SFIDENUM_CONFIG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("Failed to run binary")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn files(&self) -> Vec<String> {
        std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn expected_ids(values: impl IntoIterator<Item = i64>, to18: bool) -> Vec<String> {
    let prefix = Prefix::new("001Vc00").unwrap();
    values
        .into_iter()
        .map(|v| compose(&prefix, v, to18).id)
        .collect()
}

// ============================================================================
// Decode / Analyze Tests
// ============================================================================

#[test]
fn test_decode_prints_only_the_integer() {
    let cli = TestCli::new();
    for id in [ID18, ID15] {
        let output = cli.run(&["-i", id, "-m", "d"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), format!("{COUNTER}\n"));
    }
    assert!(cli.files().is_empty());
}

#[test]
fn test_decode_warns_on_bad_checksum() {
    let cli = TestCli::new();
    let output = cli.run(&["-i", "001Vc00000PHoN1AAA", "-m", "decode"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{COUNTER}\n"));
    assert!(stderr(&output).contains("Checksum suffix does not match"));
}

#[test]
fn test_analyze_prints_json() {
    let cli = TestCli::new();
    let output = cli.run(&["-i", ID15, "-m", "analyze"]);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["id18"], ID18);
    assert_eq!(json["object_type"], "Account");
    assert_eq!(json["record_number"], COUNTER);
    assert_eq!(json["checksum_valid"], true);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_invalid_id_exits_2() {
    let cli = TestCli::new();
    for id in ["001Vc00000PHoN", "001Vc00000PHo-1", "001Vc00000PHoN1IALX"] {
        let output = cli.run(&["-i", id, "-m", "d"]);
        assert_eq!(output.status.code(), Some(2), "{id}");
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).contains("Error"));
    }
}

#[test]
fn test_missing_seq_exits_2() {
    let cli = TestCli::new();
    let output = cli.run(&["-i", ID18, "-m", "efc", "--displayonly"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let output = cli.run(&["-i", ID18, "-m", "efc", "--seq", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(cli.files().is_empty());
}

#[test]
fn test_missing_or_out_of_range_start_exits_2() {
    let cli = TestCli::new();
    let output = cli.run(&["-i", ID18, "-m", "efv", "--seq", "3"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--start must be provided for --mode enum-from-value"));

    let too_big = (MAX_COUNTER + 1).to_string();
    for start in ["-1", too_big.as_str()] {
        let output = cli.run(&["-i", ID18, "-m", "efv", "--start", start, "--seq", "3"]);
        assert_eq!(output.status.code(), Some(2), "{start}");
        assert!(output.stdout.is_empty());
    }
    assert!(cli.files().is_empty());
}

#[test]
fn test_usage_error_exits_2() {
    let cli = TestCli::new();
    let output = cli.run(&["-i", ID18, "-m", "explode"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_exits_1() {
    let cli = TestCli::new();
    let output = cli
        .command()
        .args(["-i", ID18, "-m", "d"])
        .env("SFIDENUM__ENUMERATION__QUEUE_CAPACITY", "0")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

// ============================================================================
// Display-only Enumeration Tests
// ============================================================================

#[test]
fn test_displayonly_sequential_ascending() {
    let cli = TestCli::new();
    let output = cli.run(&[
        "-i", ID18, "-m", "efc", "--seq", "5", "--threads", "1", "--displayonly",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, expected_ids(COUNTER..COUNTER + 5, false));
    assert!(cli.files().is_empty());
}

#[test]
fn test_displayonly_sequential_descending_18() {
    let cli = TestCli::new();
    let output = cli.run(&[
        "-i", ID15, "-m", "efc", "--seq", "-5", "--threads", "1", "--displayonly", "--to18",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, expected_ids((COUNTER - 4..=COUNTER).rev(), true));
    assert_eq!(lines[0], ID18);
}

#[test]
fn test_displayonly_fixes_suffix() {
    let cli = TestCli::new();
    let output = cli.run(&["-i", ID15, "-m", "efc", "--seq", "1", "--displayonly", "--to18"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{ID18}\n"));
}

#[test]
fn test_displayonly_parallel_outputs_whole_lines() {
    let cli = TestCli::new();
    let output = cli.run(&[
        "-i", ID18, "-m", "efv", "--start", "0", "--seq", "300", "--threads", "8",
        "--displayonly", "--to18",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let shape = Regex::new(r"^001Vc00[0-9A-Za-z]{8}[A-Z0-5]{3}$").unwrap();
    let text = stdout(&output);
    assert!(text.lines().all(|line| shape.is_match(line)));

    let got: BTreeSet<String> = text.lines().map(str::to_string).collect();
    let want: BTreeSet<String> = expected_ids(0..300, true).into_iter().collect();
    assert_eq!(got, want);
}

#[test]
fn test_displayonly_huge_thread_count() {
    let cli = TestCli::new();
    let output = cli.run(&[
        "-i", ID18, "-m", "efv", "--start", "0", "--seq", "3000", "--threads", "60000",
        "--displayonly",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let got: BTreeSet<String> = stdout(&output).lines().map(str::to_string).collect();
    let want: BTreeSet<String> = expected_ids(0..3000, false).into_iter().collect();
    assert_eq!(got, want);
}

#[test]
fn test_displayonly_truncates_at_upper_bound() {
    let cli = TestCli::new();
    let start = (MAX_COUNTER - 1).to_string();
    let output = cli.run(&[
        "-i", ID18, "-m", "efv", "--start", start.as_str(), "--seq", "5", "--threads", "1",
        "--displayonly",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "001Vc00zzzzzzzy\n001Vc00zzzzzzzz\n");
}

// ============================================================================
// File Enumeration Tests
// ============================================================================

#[test]
fn test_file_sequential_order_and_silent_stdout() {
    let cli = TestCli::new();
    let output = cli.run(&[
        "-i", ID18, "-m", "efc", "--seq", "-20", "--threads", "1", "--outfile", "out.txt",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    assert_eq!(
        read_lines(&cli.path("out.txt")),
        expected_ids((COUNTER - 19..=COUNTER).rev(), false)
    );
}

#[test]
fn test_file_parallel_contains_every_id() {
    let cli = TestCli::new();
    let output = cli.run(&[
        "-i", ID18, "-m", "efv", "--start", "366897425", "--seq", "2000", "--threads", "16",
        "--outfile", "out.txt",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let lines = read_lines(&cli.path("out.txt"));
    assert_eq!(lines.len(), 2000);
    let got: BTreeSet<String> = lines.into_iter().collect();
    let want: BTreeSet<String> = expected_ids(366_897_425..366_899_425, false)
        .into_iter()
        .collect();
    assert_eq!(got, want);
}

#[test]
fn test_file_is_truncated() {
    let cli = TestCli::new();
    std::fs::write(cli.path("out.txt"), "old\nold\nold\nold\n").unwrap();

    let output = cli.run(&["-i", ID18, "-m", "efc", "--seq", "1", "--outfile", "out.txt"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_lines(&cli.path("out.txt")), vec![ID15.to_string()]);
}

#[test]
fn test_default_output_filename() {
    let cli = TestCli::new();
    let output = cli.run(&["-i", ID18, "-m", "efc", "--seq", "3"]);
    assert_eq!(output.status.code(), Some(0));

    let files = cli.files();
    assert_eq!(files.len(), 1);
    let pattern = Regex::new(r"^sfidenum-\d{8}-\d{6}\.txt$").unwrap();
    assert!(pattern.is_match(&files[0]), "{}", files[0]);
    assert_eq!(read_lines(&cli.path(&files[0])).len(), 3);
}

#[test]
fn test_write_failure_exits_4() {
    let cli = TestCli::new();
    let output = cli.run(&[
        "-i", ID18, "-m", "efc", "--seq", "50", "--outfile", "missing/out.txt",
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("missing/out.txt"));
}
