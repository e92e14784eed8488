pub mod background;
pub mod outline;

pub use background::fill_background;
pub use outline::walk;
