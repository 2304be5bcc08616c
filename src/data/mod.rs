pub mod dataset;
pub mod loader;

pub use dataset::Dataset;
pub use loader::{load_city, load_data, read_trips};
