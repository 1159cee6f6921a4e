//! Tween animations driven by the [`slidemenu_core::FrameClock`].

mod animation;
mod easing;

pub use animation::*;
pub use easing::*;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationSpec, Lerp};
    pub use crate::easing::Easing;
}
