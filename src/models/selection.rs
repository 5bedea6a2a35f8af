use super::{City, DayFilter, DisplayMode, MonthFilter};

/// Choices collected from the user for one pass through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
    pub mode: DisplayMode,
}
