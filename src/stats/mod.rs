//! Pure aggregations over a [`crate::data::Dataset`]. Nothing here prints.

pub mod counts;
pub mod describe;
pub mod trips;

pub use counts::{grouped_mean, grouped_value_counts, mode, sorted_counts, value_counts};
pub use describe::{Summary, describe};
