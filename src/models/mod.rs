pub mod city;
pub mod display_mode;
pub mod month;
pub mod selection;
pub mod trip;
pub mod weekday;

pub use city::City;
pub use display_mode::DisplayMode;
pub use month::MonthFilter;
pub use selection::Selection;
pub use trip::TripRecord;
pub use weekday::DayFilter;
