mod euler;
mod range;

pub use euler::{rotate, EulerAngles};
pub use range::{lerp, remap_clamped};
