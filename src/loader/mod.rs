mod json_file;
mod offset_deserializer;
mod overview_loader;
mod series_loader;

pub use json_file::JsonFileError;
pub use overview_loader::load_overview;
pub use series_loader::{load_elevations, load_points, load_timestamps};
