//! Live rig transforms: the state the renderer binds its meshes to.

use serde::{Deserialize, Serialize};

use crate::body::{body_pose_set, LimbPose};
use crate::face::expression_pose;
use figurine_api_core::{BodyPose, Expression, Vec3};

pub const LEFT_EYE_REST: Vec3 = Vec3::new(-0.2, 0.1, 0.65);
pub const RIGHT_EYE_REST: Vec3 = Vec3::new(0.2, 0.1, 0.65);

/// One animatable transform.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler rotation vector (radians).
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Ease every component toward the limb target by `factor`.
    pub fn ease_toward(&mut self, target: &LimbPose, factor: f32) {
        self.position = self.position.lerp(target.position, factor);
        self.rotation = self.rotation.lerp(target.rotation, factor);
        self.scale = self.scale.lerp(target.scale, factor);
    }
}

impl From<&LimbPose> for Transform {
    fn from(pose: &LimbPose) -> Self {
        Self {
            position: pose.position,
            rotation: pose.rotation,
            scale: pose.scale,
        }
    }
}

/// Every transform the renderer reads, initialized to the rest pose and
/// mutated once per frame by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    pub mouth: Transform,
    pub left_brow: Transform,
    pub right_brow: Transform,
    pub left_eye: Transform,
    pub right_eye: Transform,
    pub left_arm: Transform,
    pub right_arm: Transform,
    pub left_leg: Transform,
    pub right_leg: Transform,
    pub torso: Transform,
    /// Vertical offset of the whole character (walk bounce).
    pub root_offset_y: f32,
}

impl Rig {
    /// Neutral face, standing body, eyes at their rest positions.
    pub fn rest() -> Self {
        let face = expression_pose(Expression::Neutral);
        let body = body_pose_set(BodyPose::Standing);
        Self {
            mouth: Transform {
                position: face.mouth_position,
                rotation: Vec3::ZERO,
                scale: face.mouth_scale,
            },
            left_brow: Transform {
                position: face.left_brow_position,
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
            },
            right_brow: Transform {
                position: face.right_brow_position,
                rotation: Vec3::ZERO,
                scale: Vec3::ONE,
            },
            left_eye: Transform {
                position: LEFT_EYE_REST,
                rotation: Vec3::ZERO,
                scale: face.eye_scale,
            },
            right_eye: Transform {
                position: RIGHT_EYE_REST,
                rotation: Vec3::ZERO,
                scale: face.eye_scale,
            },
            left_arm: Transform::from(&body.left_arm),
            right_arm: Transform::from(&body.right_arm),
            left_leg: Transform::from(&body.left_leg),
            right_leg: Transform::from(&body.right_leg),
            torso: Transform::from(&body.torso),
            root_offset_y: 0.0,
        }
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::rest()
    }
}
