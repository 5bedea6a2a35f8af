pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{convert_seconds, format_hour, format_num};
