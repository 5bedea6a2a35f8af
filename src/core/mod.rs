pub mod loader;
pub mod session;
pub mod stats;

pub use loader::{Dataset, apply_filters, load_city, load_data};
pub use session::Session;
