mod coords;
pub mod hit_testing;

pub use coords::{CanvasSize, Coord, Delta};
