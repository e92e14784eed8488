pub mod bounds;
pub mod projection;
pub mod transform;

pub use bounds::Bounds;
pub use projection::{Projection, WebMercator};
pub use transform::Transform;
