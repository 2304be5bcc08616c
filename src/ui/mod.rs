pub mod console;
pub mod messages;
pub mod pager;

pub use console::Console;
