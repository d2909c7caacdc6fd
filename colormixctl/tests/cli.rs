use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "COLORMIX_CONFIG_PATH",
    "COLORMIX_CONFIG_JSON",
    "COLORMIX_LANG",
    "COLORMIX_LABEL_FORMAT",
    "COLORMIX_LOG",
    "RUST_LOG",
];

/// Command running in an empty directory with no colormix environment, so
/// neither a stray `.env` nor `colormix.toml` can leak in.
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("colormixctl");
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mix"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("--lang"));
}

#[test]
fn mix_prints_average_and_rows() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["mix", "#FF0000", "#0000FF", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= Result: #800080FF"))
        .stdout(predicate::str::contains("0: #FF0000FF (#FF0000FF)"))
        .stdout(predicate::str::contains("1: #0000FFFF (#0000FFFF)"));
}

#[test]
fn russian_is_the_default_language() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["mix", "1,0,0,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Добавить цвет | EN"))
        .stdout(predicate::str::contains("= Результат: #FF0000FF"));
}

#[test]
fn mix_rejects_out_of_range_channel() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["mix", "1.5,0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn run_applies_script_from_stdin() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["run", "--format", "percent"])
        .write_stdin("add #FF0000 warm red\nadd #0000FF\nremove 0\nlang en\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("= Result: R 0% G 0% B 100% A 100%"))
        .stdout(predicate::str::contains("warm red").not());
}

#[test]
fn run_reports_failed_commands() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["run", "--lang", "en"])
        .write_stdin("add #00FF00\nremove 5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "line 2: index 5 out of range for 1 entries",
        ))
        .stdout(predicate::str::contains("= Result: #00FF00FF"));
}

#[test]
fn run_reads_script_file_and_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("colormix.toml"),
        "language = \"en\"\nlabel_format = \"percent\"\n",
    )
    .unwrap();
    let script = dir.path().join("mix.txt");
    fs::write(&script, "# empty screen first\nshow\nadd 0,1,0,1 leaf\n")
        .unwrap();

    isolated(&dir)
        .arg("run")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("= Add colors to mix"))
        .stdout(predicate::str::contains("0: leaf (#00FF00FF)"))
        .stdout(predicate::str::contains("= Result: R 0% G 100% B 0% A 100%"));
}

#[test]
fn cli_flag_overrides_environment() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .env("COLORMIX_LANG", "en")
        .args(["mix", "#FFF", "--lang", "ru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Результат"));
}

#[test]
fn invalid_environment_override_fails() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .env("COLORMIX_LANG", "klingon")
        .args(["mix", "#FFF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("COLORMIX_LANG"));
}
