pub mod canvas;
pub mod export;
pub mod pdf;
pub mod stamp;

pub use canvas::{Canvas, Color, WHITE};
pub use export::{ExportFormat, write_image};
pub use stamp::stamp_dot;
