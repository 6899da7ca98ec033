//! Animation primitives for dragclose
//!
//! The quintic settle curve, settle durations and the frame-driven
//! [`SettleAnimation`] that capture engines use to move a released panel to
//! its resting position.

mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{quintic_out, AnimationSpec, SettleAnimation};
}
