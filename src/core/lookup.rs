//! Fixed lookup tables that turn free-form answers into canonical keys.
//!
//! Matching is an exact, case-insensitive membership test against each
//! entry's accepted spellings. No trimming, no partial matches.

/// Filter key meaning "no restriction" for both months and days.
pub const ALL: u32 = 0;

/// One canonical value: its key, the name shown to the user and every
/// accepted (lowercase) spelling.
#[derive(Debug)]
pub struct Choice<K: 'static> {
    pub key: K,
    pub name: &'static str,
    pub accepted: &'static [&'static str],
}

/// Months covered by the datasets (January to June).
pub const MONTHS: &[Choice<u32>] = &[
    Choice { key: ALL, name: "All", accepted: &["all"] },
    Choice { key: 1, name: "January", accepted: &["january", "jan", "1", "01"] },
    Choice { key: 2, name: "February", accepted: &["february", "feb", "2", "02"] },
    Choice { key: 3, name: "March", accepted: &["march", "mar", "3", "03"] },
    Choice { key: 4, name: "April", accepted: &["april", "apr", "4", "04"] },
    Choice { key: 5, name: "May", accepted: &["may", "5", "05"] },
    Choice { key: 6, name: "June", accepted: &["june", "jun", "6", "06"] },
];

/// Days of the week, 1 = Sunday.
pub const DAYS: &[Choice<u32>] = &[
    Choice { key: ALL, name: "All", accepted: &["all"] },
    Choice { key: 1, name: "Sunday", accepted: &["sunday", "sun", "1"] },
    Choice { key: 2, name: "Monday", accepted: &["monday", "mon", "2"] },
    Choice { key: 3, name: "Tuesday", accepted: &["tuesday", "tue", "3"] },
    Choice { key: 4, name: "Wednesday", accepted: &["wednesday", "wed", "4"] },
    Choice { key: 5, name: "Thursday", accepted: &["thursday", "thu", "5"] },
    Choice { key: 6, name: "Friday", accepted: &["friday", "fri", "6"] },
    Choice { key: 7, name: "Saturday", accepted: &["saturday", "sat", "7"] },
];

pub const YES_NO: &[Choice<bool>] = &[
    Choice { key: true, name: "Yes", accepted: &["y", "yes"] },
    Choice { key: false, name: "No", accepted: &["n", "no"] },
];

/// Return the key whose accepted spellings contain `input` (case-insensitive),
/// or `None` when nothing matches.
pub fn key_for_value<K: Copy>(input: &str, table: &[Choice<K>]) -> Option<K> {
    let wanted = input.to_lowercase();
    table
        .iter()
        .find(|c| c.accepted.contains(&wanted.as_str()))
        .map(|c| c.key)
}

pub fn name_for_key<K: PartialEq>(key: K, table: &[Choice<K>]) -> Option<&'static str> {
    table.iter().find(|c| c.key == key).map(|c| c.name)
}
