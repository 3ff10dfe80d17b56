//! Authored body poses, one per-limb transform set per pose, and their
//! linear blend. Rotations are Euler vectors blended component-wise (the
//! poses are small enough that spherical interpolation buys nothing).

use serde::{Deserialize, Serialize};

use figurine_api_core::{BodyPose, Vec3};

/// Position/rotation/scale target for one limb.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LimbPose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl LimbPose {
    const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn blend(base: &Self, target: &Self, intensity: f32) -> Self {
        Self {
            position: base.position.lerp(target.position, intensity),
            rotation: base.rotation.lerp(target.rotation, intensity),
            scale: base.scale.lerp(target.scale, intensity),
        }
    }
}

/// The five limb targets making up one body pose.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyPoseSet {
    pub left_arm: LimbPose,
    pub right_arm: LimbPose,
    pub left_leg: LimbPose,
    pub right_leg: LimbPose,
    pub torso: LimbPose,
}

impl BodyPoseSet {
    pub fn blend(base: &Self, target: &Self, intensity: f32) -> Self {
        Self {
            left_arm: LimbPose::blend(&base.left_arm, &target.left_arm, intensity),
            right_arm: LimbPose::blend(&base.right_arm, &target.right_arm, intensity),
            left_leg: LimbPose::blend(&base.left_leg, &target.left_leg, intensity),
            right_leg: LimbPose::blend(&base.right_leg, &target.right_leg, intensity),
            torso: LimbPose::blend(&base.torso, &target.torso, intensity),
        }
    }
}

const LEFT_ARM_REST: Vec3 = Vec3::new(-0.65, 0.45, 0.0);
const RIGHT_ARM_REST: Vec3 = Vec3::new(0.65, 0.45, 0.0);
const LEFT_LEG_REST: Vec3 = Vec3::new(-0.3, -0.5, 0.0);
const RIGHT_LEG_REST: Vec3 = Vec3::new(0.3, -0.5, 0.0);
const TORSO_REST: Vec3 = Vec3::new(0.0, -0.05, 0.0);

const STANDING: BodyPoseSet = BodyPoseSet {
    left_arm: LimbPose::new(LEFT_ARM_REST, Vec3::ZERO),
    right_arm: LimbPose::new(RIGHT_ARM_REST, Vec3::ZERO),
    left_leg: LimbPose::new(LEFT_LEG_REST, Vec3::ZERO),
    right_leg: LimbPose::new(RIGHT_LEG_REST, Vec3::ZERO),
    torso: LimbPose::new(TORSO_REST, Vec3::ZERO),
};

const WALKING: BodyPoseSet = BodyPoseSet {
    left_arm: LimbPose::new(LEFT_ARM_REST, Vec3::new(0.5, 0.0, 0.0)),
    right_arm: LimbPose::new(RIGHT_ARM_REST, Vec3::new(-0.5, 0.0, 0.0)),
    left_leg: LimbPose::new(LEFT_LEG_REST, Vec3::new(-0.5, 0.0, 0.0)),
    right_leg: LimbPose::new(RIGHT_LEG_REST, Vec3::new(0.5, 0.0, 0.0)),
    torso: LimbPose::new(TORSO_REST, Vec3::new(0.0, 0.0, 0.1)),
};

const RUNNING: BodyPoseSet = BodyPoseSet {
    left_arm: LimbPose::new(LEFT_ARM_REST, Vec3::new(1.0, 0.0, 0.0)),
    right_arm: LimbPose::new(RIGHT_ARM_REST, Vec3::new(-1.0, 0.0, 0.0)),
    left_leg: LimbPose::new(LEFT_LEG_REST, Vec3::new(-1.0, 0.0, 0.0)),
    right_leg: LimbPose::new(RIGHT_LEG_REST, Vec3::new(1.0, 0.0, 0.0)),
    torso: LimbPose::new(TORSO_REST, Vec3::new(0.2, 0.0, 0.2)),
};

const JUMPING: BodyPoseSet = BodyPoseSet {
    left_arm: LimbPose::new(LEFT_ARM_REST, Vec3::new(-0.5, 0.0, -0.5)),
    right_arm: LimbPose::new(RIGHT_ARM_REST, Vec3::new(-0.5, 0.0, 0.5)),
    left_leg: LimbPose::new(LEFT_LEG_REST, Vec3::new(0.5, 0.0, 0.0)),
    right_leg: LimbPose::new(RIGHT_LEG_REST, Vec3::new(0.5, 0.0, 0.0)),
    torso: LimbPose::new(Vec3::ZERO, Vec3::new(-0.2, 0.0, 0.0)),
};

/// Total lookup: every body pose has an authored limb set.
pub fn body_pose_set(pose: BodyPose) -> &'static BodyPoseSet {
    match pose {
        BodyPose::Standing => &STANDING,
        BodyPose::Walking => &WALKING,
        BodyPose::Running => &RUNNING,
        BodyPose::Jumping => &JUMPING,
    }
}
