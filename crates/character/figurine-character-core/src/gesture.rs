//! Arm-rotation targets for each gesture.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use figurine_api_core::{Gesture, Vec3};

/// Target Euler rotation for each arm while a gesture is held.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureArms {
    pub left: Vec3,
    pub right: Vec3,
}

/// Total lookup: every gesture has an arm-rotation pair. `None` targets the
/// rest rotation; the engine substitutes the blended pose rotation for it so
/// that non-standing poses keep their authored arm carriage.
pub fn gesture_arms(gesture: Gesture) -> GestureArms {
    match gesture {
        Gesture::None => GestureArms {
            left: Vec3::ZERO,
            right: Vec3::ZERO,
        },
        Gesture::PointLeft => GestureArms {
            left: Vec3::new(0.0, FRAC_PI_4, -FRAC_PI_2),
            right: Vec3::ZERO,
        },
        Gesture::PointRight => GestureArms {
            left: Vec3::ZERO,
            right: Vec3::new(0.0, -FRAC_PI_4, FRAC_PI_2),
        },
        Gesture::Stretch => GestureArms {
            left: Vec3::new(0.0, 0.0, -FRAC_PI_2),
            right: Vec3::new(0.0, 0.0, FRAC_PI_2),
        },
        Gesture::ReachFront => GestureArms {
            left: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
            right: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        },
    }
}
