use clap::Parser;

/// Command-line interface definition for bikeshare
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: filter by city, month and weekday and print trip statistics",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the city CSV files (overrides the config file)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Rows per page for long tables (overrides the config file)
    #[arg(long = "page-size", value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Read settings from this YAML file instead of ~/.bikeshare/bikeshare.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Do not print how long each report section took
    #[arg(long = "no-timing")]
    pub no_timing: bool,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid page size: {}", s)),
    }
}
