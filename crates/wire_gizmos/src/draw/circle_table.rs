//! Shared unit-circle samples
//!
//! Every circle, arc, dome, cone and capsule reuses the same table of
//! `(cos θ, sin θ)` pairs. It is built once on first use and never changes.

use crate::foundation::math::{constants, Vec2};
use std::sync::LazyLock;

/// Number of samples on a full circle
pub const CIRCLE_RESOLUTION: usize = 32;

/// Angle between consecutive samples, in radians
pub const CIRCLE_STEP: f32 = constants::TAU / CIRCLE_RESOLUTION as f32;

static UNIT_CIRCLE: LazyLock<[Vec2; CIRCLE_RESOLUTION]> = LazyLock::new(|| {
    log::trace!("Building unit circle table ({CIRCLE_RESOLUTION} samples)");
    std::array::from_fn(|i| {
        let angle = i as f32 * CIRCLE_STEP;
        Vec2::new(angle.cos(), angle.sin())
    })
});

/// The unit-circle table; sample `i` lies at angle `i * CIRCLE_STEP`
pub fn unit_circle() -> &'static [Vec2; CIRCLE_RESOLUTION] {
    &UNIT_CIRCLE
}
