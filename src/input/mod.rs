pub mod geojson;

pub use geojson::{load_shape, parse_shape};
