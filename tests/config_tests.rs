use bikeshare::cli::Cli;
use bikeshare::config::Config;
use bikeshare::errors::AppError;
use bikeshare::resolve_config;
use bikeshare::utils::{format_number, secs2readable};
use clap::Parser;

mod common;
use common::write_config;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.data_dir, ".");
    assert_eq!(cfg.page_size, 5);
    assert!(cfg.show_timing);
    assert_eq!(Config::from_yaml("").expect("empty"), cfg);
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("page_size: 10\n").expect("yaml");
    assert_eq!(cfg.page_size, 10);
    assert_eq!(cfg.data_dir, ".");
    assert!(cfg.show_timing);
}

#[test]
fn test_invalid_yaml_and_values() {
    assert!(matches!(
        Config::from_yaml("page_size: [1, 2]"),
        Err(AppError::ConfigParse(_))
    ));
    assert!(matches!(
        Config::from_yaml("page_size: 0"),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        Config::load_from(std::path::Path::new("/definitely/not/here.conf")),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_cli_overrides_config_file() {
    let path = write_config(
        "overrides",
        "data_dir: /srv/bikeshare\npage_size: 8\nshow_timing: true\n",
    );
    let cli = Cli::parse_from([
        "bikeshare",
        "--config",
        &path,
        "--page-size",
        "2",
        "--no-timing",
    ]);
    let cfg = resolve_config(&cli).expect("resolve");
    assert_eq!(cfg.data_dir, "/srv/bikeshare");
    assert_eq!(cfg.page_size, 2);
    assert!(!cfg.show_timing);

    let cli = Cli::parse_from(["bikeshare", "--config", &path, "--data-dir", "data"]);
    let cfg = resolve_config(&cli).expect("resolve");
    assert_eq!(cfg.data_dir, "data");
    assert_eq!(cfg.page_size, 8);
}

#[test]
fn test_number_formatting() {
    assert_eq!(format_number(5400.0), "5400");
    assert_eq!(format_number(936.2345), "936.23");
    assert_eq!(secs2readable(59.6), "00:01:00");
    assert_eq!(secs2readable(3725.0), "01:02:05");
    assert_eq!(secs2readable(90_061.0), "1 day, 01:01:01");
    assert_eq!(secs2readable(3.0 * 86_400.0 + 5.0), "3 days, 00:00:05");
}
