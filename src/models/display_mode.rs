#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Page through the filtered rows
    Raw,
    /// Print the four statistics reports
    Format,
}

impl DisplayMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Raw" => Some(DisplayMode::Raw),
            "Format" => Some(DisplayMode::Format),
            _ => None,
        }
    }
}
