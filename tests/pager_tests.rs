mod common;
use bikeshare::ui::pager::{show_counts, show_paged};
use bikeshare::utils::table::Table;
use common::{console, output};

const MORE: &str = "Do you want to see more of this data?";

fn stations(n: usize) -> Table {
    let rows: Vec<(String, usize)> = (1..=n).map(|i| (format!("Station {i:02}"), 100 - i)).collect();
    Table::counts("Station", "Count", &rows)
}

#[test]
fn test_twelve_rows_three_pages_two_prompts() {
    let mut c = console("y\nyes\n");
    let shown = show_paged(&mut c, &stations(12), 5).expect("paging");
    assert_eq!(shown, 12);

    let out = output(c);
    assert_eq!(out.matches(MORE).count(), 2);
    assert!(out.contains("Station 01"));
    assert!(out.contains("Station 12"));

    // rows 6..10 come after the first prompt, 11..12 after the second
    let first_prompt = out.find(MORE).expect("first prompt");
    assert!(out.find("Station 05").expect("row 5") < first_prompt);
    assert!(out.find("Station 06").expect("row 6") > first_prompt);
    let last_prompt = out.rfind(MORE).expect("last prompt");
    assert!(out.find("Station 10").expect("row 10") < last_prompt);
    assert!(out.find("Station 11").expect("row 11") > last_prompt);
}

#[test]
fn test_no_stops_immediately() {
    let mut c = console("n\n");
    let shown = show_paged(&mut c, &stations(12), 5).expect("paging");
    assert_eq!(shown, 5);

    let out = output(c);
    assert_eq!(out.matches(MORE).count(), 1);
    assert!(!out.contains("Station 06"));
}

#[test]
fn test_invalid_answer_is_asked_again() {
    let mut c = console("maybe\nYES\nNo\n");
    let shown = show_paged(&mut c, &stations(12), 5).expect("paging");
    assert_eq!(shown, 10);

    let out = output(c);
    assert_eq!(
        out.matches("Please enter \"y\" or \"yes\" or \"n\" or \"no\"").count(),
        1
    );
    assert_eq!(out.matches(MORE).count(), 3);
}

#[test]
fn test_exact_multiple_does_not_prompt_after_last_page() {
    let mut c = console("y\n");
    let shown = show_paged(&mut c, &stations(10), 5).expect("paging");
    assert_eq!(shown, 10);
    assert_eq!(output(c).matches(MORE).count(), 1);
}

#[test]
fn test_single_page_never_prompts() {
    let mut c = console("");
    let shown = show_counts(&mut c, "Hour", &[(8, 3), (9, 1), (17, 2)], 5).expect("paging");
    assert_eq!(shown, 3);

    let out = output(c);
    assert!(!out.contains(MORE));
    assert!(out.starts_with("Hour"));
}

#[test]
fn test_end_of_input_stops_paging() {
    let mut c = console("");
    let shown = show_paged(&mut c, &stations(12), 5).expect("paging");
    assert_eq!(shown, 5);
}

#[test]
fn test_columns_line_up_across_pages() {
    let mut table = Table::counts("Station", "Count", &[("A", 1000)]);
    table.add_row(vec!["Much Longer Station".to_string(), "7".to_string()]);
    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Station              Count");
    assert_eq!(lines[1], "A                     1000");
    assert_eq!(lines[2], "Much Longer Station      7");
}
