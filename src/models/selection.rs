use crate::core::lookup::{self, DAYS, MONTHS};
use crate::models::city::City;

/// A validated (city, month, day) filter. Month and day are filter keys:
/// `lookup::ALL` (0) means no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: u32,
    pub day: u32,
}

impl Selection {
    pub fn new(city: City, month: u32, day: u32) -> Self {
        Self { city, month, day }
    }

    pub fn month_name(&self) -> &'static str {
        lookup::name_for_key(self.month, MONTHS).unwrap_or("Unknown")
    }

    pub fn day_name(&self) -> &'static str {
        lookup::name_for_key(self.day, DAYS).unwrap_or("Unknown")
    }
}
