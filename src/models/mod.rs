pub mod city;
pub mod selection;
pub mod trip;

pub use city::City;
pub use selection::Selection;
pub use trip::Trip;
