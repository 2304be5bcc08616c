use crate::core::lookup::ALL;
use crate::models::Trip;

/// Trips of one city, possibly restricted to a month and/or weekday.
///
/// `has_gender` / `has_birth_year` record whether the source file had those
/// columns at all; blank cells inside an existing column are simply `None`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep the trips matching both filter keys (`ALL` disables a filter).
    pub fn filtered(self, month: u32, day: u32) -> Dataset {
        let Dataset {
            trips,
            has_gender,
            has_birth_year,
        } = self;

        let trips = trips
            .into_iter()
            .filter(|t| month == ALL || t.month == month)
            .filter(|t| day == ALL || t.weekday == day)
            .collect();

        Dataset {
            trips,
            has_gender,
            has_birth_year,
        }
    }
}
