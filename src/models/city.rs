use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase canonical name, also what the user types (case-insensitive).
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's trip records inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Washington publishes neither gender nor birth year.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }

    pub fn from_name(s: &str) -> AppResult<Self> {
        let lower = s.to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| AppError::UnknownCity(s.to_string()))
    }
}
