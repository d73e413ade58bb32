//! CLI integration tests for the csvdict binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn csvdict() -> Command {
    let mut cmd = Command::cargo_bin("csvdict").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

const TABLE: &str = "\
sku,description,warehouse
A-1,Stainless steel bolt,Rotterdam
A-2,Stainless steel bolt,Rotterdam
B-7,Copper washer,Hamburg
";

#[test]
fn test_help_lists_subcommands() {
    csvdict()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compress"))
        .stdout(predicate::str::contains("decompress"));
}

#[test]
fn test_compress_then_decompress() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stock.csv");
    let packed = dir.path().join("stock.csvd");
    let restored = dir.path().join("stock.out.csv");
    fs::write(&input, TABLE).unwrap();

    csvdict()
        .arg("compress")
        .arg(&input)
        .arg(&packed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Compression completed."))
        .stdout(predicate::str::contains("Compression ratio:"));

    csvdict()
        .arg("decompress")
        .arg(&packed)
        .arg(&restored)
        .assert()
        .success()
        .stdout(predicate::str::contains("Decompression completed."));

    assert_eq!(fs::read_to_string(&restored).unwrap(), TABLE);
}

#[test]
fn test_quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stock.csv");
    let packed = dir.path().join("stock.csvd");
    fs::write(&input, TABLE).unwrap();

    csvdict()
        .arg("--quiet")
        .arg("compress")
        .arg(&input)
        .arg(&packed)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_custom_delimiter_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stock.tsv");
    let packed = dir.path().join("stock.csvd");
    let restored = dir.path().join("stock.out.tsv");
    let table = TABLE.replace(',', ";");
    fs::write(&input, &table).unwrap();

    csvdict()
        .args(["--delimiter", ";", "compress"])
        .arg(&input)
        .arg(&packed)
        .assert()
        .success();
    csvdict()
        .args(["--delimiter", ";", "decompress"])
        .arg(&packed)
        .arg(&restored)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&restored).unwrap(), table);
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    csvdict()
        .arg("compress")
        .arg(dir.path().join("missing.csv"))
        .arg(dir.path().join("out.csvd"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn test_corrupt_artifact_fails() {
    let dir = TempDir::new().unwrap();
    let packed = dir.path().join("bad.csvd");
    fs::write(&packed, "{\"0\":[\"apple\"]}\n&4\n").unwrap();

    csvdict()
        .arg("decompress")
        .arg(&packed)
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data"));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    csvdict().arg("compress").assert().failure();
}

#[test]
fn test_marker_delimiter_rejected() {
    csvdict()
        .args(["--delimiter", "&", "compress", "a.csv", "b.csvd"])
        .assert()
        .failure();
}
