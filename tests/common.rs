#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::Config;
use bikeshare::ui::Console;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Chicago fixture: has Gender and Birth Year, plus the unnamed index column.
///
/// March: 4 trips (3 on Mondays), January: 1 (Sunday), June: 1 (Monday).
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-03-06 08:05:00,2017-03-06 08:15:00,600,Clark St,State St,Subscriber,Male,1985.0
2,2017-03-06 08:30:00,2017-03-06 08:50:00,1200,Clark St,Clark St,Subscriber,Female,1990.0
3,2017-03-07 17:10:00,2017-03-07 17:20:00,600,Lake Shore,State St,Customer,,
4,2017-01-01 17:00:00,2017-01-01 17:30:00,1800,Clark St,State St,Subscriber,Male,1985.0
5,2017-06-05 09:00:00,2017-06-05 09:05:00,300,Wells St,Wells St,Customer,,1970.0
6,2017-03-13 08:45:00,2017-03-13 09:00:00,900,Lake Shore,Lake Shore,Subscriber,Female,1992.0
";

/// Washington fixture: no Gender / Birth Year, fractional durations.
pub const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-02-01 10:00:00,2017-02-01 10:10:00,600.5,Union Station,Dupont Circle,Subscriber
2017-02-02 11:00:00,2017-02-02 11:20:00,1199.5,Dupont Circle,Union Station,Customer
";

/// New York City fixture: twelve different start stations, one trip each.
pub fn new_york_csv() -> String {
    let mut csv = String::from(
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 1..=12 {
        csv.push_str(&format!(
            "{i},2017-04-03 {h:02}:00:00,2017-04-03 {h:02}:10:00,600,Station {i:02},Central Park,Subscriber,Male,1980.0\n",
            h = i + 5
        ));
    }
    csv
}

/// Create (or reset) a data directory inside the system temp dir holding
/// the three city files.
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_bikeshare_data", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");

    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    fs::write(dir.join("new_york_city.csv"), new_york_csv()).expect("write new_york_city.csv");
    dir
}

/// Write a YAML config file in the temp dir and return its path.
pub fn write_config(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare.conf", name));
    fs::write(&path, content).expect("write config");
    path.to_string_lossy().to_string()
}

pub fn test_config(data_dir: &std::path::Path) -> Config {
    Config {
        data_dir: data_dir.to_string_lossy().to_string(),
        page_size: 5,
        show_timing: false,
    }
}

/// Console reading the given answers and recording everything printed.
pub fn console(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

pub fn output(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("utf-8 output")
}
