mod common;
use bikeshare::core::session::{run_session, wants_restart};
use bikeshare::ui::Console;
use common::{console, output, setup_data_dir, test_config};

const MORE: &str = "Do you want to see more of this data?";

#[test]
fn test_single_session_full_dataset() {
    let dir = setup_data_dir("session_single");
    let cfg = test_config(&dir);

    let mut c = console("chicago,all,all\nno\n");
    let reports = run_session(&mut c, &cfg).expect("session");
    assert_eq!(reports, 1);

    let out = output(c);
    assert!(out.contains("You selected the city = Chicago, the month All, and the day All"));
    assert!(out.contains("The most common month is March"));
    assert!(out.contains("The total travel time is 5400 seconds"));
    assert!(out.contains("Would you like to restart?"));
    assert!(!out.contains(MORE));
}

#[test]
fn test_bad_line_then_filtered_session() {
    let dir = setup_data_dir("session_filtered");
    let cfg = test_config(&dir);

    let mut c = console("Chicago, March\nChicago, March, Monday\n\n");
    let reports = run_session(&mut c, &cfg).expect("session");
    assert_eq!(reports, 1);

    let out = output(c);
    assert!(out.contains("Please specify the city, the month (or all), and the day (or all) with commas between them."));
    assert!(out.contains("You selected the city = Chicago, the month March, and the day Monday"));
    // three March Mondays, all subscribers
    assert!(out.contains("The total travel time is 2700 seconds"));
    assert!(!out.contains("Customer"));
}

#[test]
fn test_restart_and_paging() {
    let dir = setup_data_dir("session_restart");
    let cfg = test_config(&dir);

    // NYC April: 12 hours and 12 start stations need paging.
    // hours: stop after the first page; start stations: one more page then stop.
    let input = "new york city, april, all\nn\ny\nn\nYes\nwashington,all,all\nno\n";
    let mut c = console(input);
    let reports = run_session(&mut c, &cfg).expect("session");
    assert_eq!(reports, 2);

    let out = output(c);
    assert_eq!(out.matches(MORE).count(), 3);
    assert!(out.contains("Station 10"));
    assert!(!out.contains("Station 11"));
    assert!(out.contains("You selected the city = Washington, the month All, and the day All"));
    // only the New York City run has a Gender column
    assert_eq!(out.matches("Genders:").count(), 1);
}

#[test]
fn test_end_of_input_ends_session() {
    let dir = setup_data_dir("session_eof");
    let cfg = test_config(&dir);

    let mut c = console("");
    assert_eq!(run_session(&mut c, &cfg).expect("session"), 0);

    let mut c = console("washington,all,all\n");
    assert_eq!(run_session(&mut c, &cfg).expect("session"), 1);
}

#[test]
fn test_missing_data_file_is_an_error() {
    let dir = setup_data_dir("session_missing");
    std::fs::remove_file(dir.join("chicago.csv")).expect("remove");
    let cfg = test_config(&dir);

    let mut c = console("chicago,all,all\n");
    assert!(run_session(&mut c, &cfg).is_err());
}

#[test]
fn test_restart_answer() {
    assert!(wants_restart(Some("yes")));
    assert!(wants_restart(Some("YES")));
    assert!(wants_restart(Some(" yes ")));
    assert!(!wants_restart(Some("y")));
    assert!(!wants_restart(Some("no")));
    assert!(!wants_restart(Some("")));
    assert!(!wants_restart(None));
}

#[test]
fn test_unreadable_restart_answer_counts_as_no() {
    let dir = setup_data_dir("session_bad_utf8");
    let cfg = test_config(&dir);

    let input: &[u8] = b"washington,all,all\n\xff\nchicago,all,all\nno\n";
    let mut c = Console::new(input, Vec::new());
    let reports = run_session(&mut c, &cfg).expect("session");
    assert_eq!(reports, 1);

    let out = output(c);
    assert!(out.contains("stream did not contain valid UTF-8"));
    assert!(!out.contains("You selected the city = Chicago"));
}
