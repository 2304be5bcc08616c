use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bikeshare, setup_data_dir, write_config};

#[test]
fn test_cli_single_report() {
    let dir = setup_data_dir("cli_single");
    let cfg = write_config("cli_single", "show_timing: true\n");

    bikeshare()
        .args(["--config", &cfg, "--data-dir", &dir.to_string_lossy(), "--no-timing"])
        .write_stdin("chicago, all, all\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("The most common month is March"))
        .stdout(contains("Earliest = 1970"))
        .stdout(contains("This took").not());
}

#[test]
fn test_cli_data_dir_from_config_file() {
    let dir = setup_data_dir("cli_config");
    let cfg = write_config(
        "cli_config",
        &format!("data_dir: \"{}\"\npage_size: 3\n", dir.to_string_lossy()),
    );

    // page size 3: three prompts to see all twelve hours, then stop the station list
    bikeshare()
        .args(["--config", &cfg])
        .write_stdin("new york city,all,all\ny\ny\ny\nn\nn\nno\n")
        .assert()
        .success()
        .stdout(contains("You selected the city = New York City"))
        .stdout(contains("This took"));
}

#[test]
fn test_cli_end_of_input_exits_cleanly() {
    let dir = setup_data_dir("cli_eof");
    let cfg = write_config("cli_eof", "");

    bikeshare()
        .args(["--config", &cfg, "--data-dir", &dir.to_string_lossy()])
        .write_stdin("boston,all,all\n")
        .assert()
        .success()
        .stdout(contains("Please enter a city from the list: Chicago, New York City, Washington"));
}

#[test]
fn test_cli_missing_data_file_fails() {
    let dir = setup_data_dir("cli_missing");
    std::fs::remove_file(dir.join("washington.csv")).expect("remove");
    let cfg = write_config("cli_missing", "");

    bikeshare()
        .args(["--config", &cfg, "--data-dir", &dir.to_string_lossy()])
        .write_stdin("washington,all,all\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("washington.csv"));
}

#[test]
fn test_cli_rejects_zero_page_size() {
    bikeshare().args(["--page-size", "0"]).assert().failure();
}

#[test]
fn test_cli_invalid_config() {
    let cfg = write_config("cli_invalid", "page_size: 0\n");

    bikeshare()
        .args(["--config", &cfg])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("page_size must be at least 1"));
}
