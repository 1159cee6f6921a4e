//! Foundation elements for the sliding menu: pointer input, layout direction
//! and the horizontal scroll container the widget drives.

pub mod gesture_constants;
pub mod layout_direction;
pub mod nodes;
pub mod scroll;

pub use gesture_constants::*;
pub use layout_direction::LayoutDirection;
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId};
pub use scroll::{HorizontalScrollState, ScrollConfig, ScrollContainer};

pub mod prelude {
    pub use crate::layout_direction::LayoutDirection;
    pub use crate::nodes::input::prelude::*;
    pub use crate::scroll::{HorizontalScrollState, ScrollConfig, ScrollContainer};
}
