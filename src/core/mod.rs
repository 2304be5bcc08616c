pub mod filters;
pub mod lookup;
pub mod session;
