// Export our modules for use by the TUI and web viewers
pub mod domain;
pub mod extent;
pub mod model;
pub mod scale;

pub use domain::Month;
pub use extent::Extents;
pub use model::{DataError, Dataset, TemperatureRecord};
