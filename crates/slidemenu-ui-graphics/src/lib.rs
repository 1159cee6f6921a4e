//! Pure math/data for positions, bounds and layer transforms.

mod geometry;
mod layer;

pub use geometry::*;
pub use layer::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::layer::GraphicsLayer;
}
