//! Authored facial poses, one per expression, and their linear blend.
//!
//! The tables are hand-tuned constants; they never change at runtime.

use serde::{Deserialize, Serialize};

use figurine_api_core::{lerp, Expression, Vec3};

/// Facial-feature targets for one expression.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpressionPose {
    pub mouth_scale: Vec3,
    pub mouth_position: Vec3,
    pub left_brow_rotation: f32,
    pub right_brow_rotation: f32,
    pub left_brow_position: Vec3,
    pub right_brow_position: Vec3,
    pub eye_scale: Vec3,
}

impl ExpressionPose {
    /// Component-wise linear interpolation of every sub-field. Intensity is
    /// not clamped; values outside [0,1] extrapolate past the authored pose.
    pub fn blend(base: &Self, target: &Self, intensity: f32) -> Self {
        Self {
            mouth_scale: base.mouth_scale.lerp(target.mouth_scale, intensity),
            mouth_position: base.mouth_position.lerp(target.mouth_position, intensity),
            left_brow_rotation: lerp(base.left_brow_rotation, target.left_brow_rotation, intensity),
            right_brow_rotation: lerp(
                base.right_brow_rotation,
                target.right_brow_rotation,
                intensity,
            ),
            left_brow_position: base.left_brow_position.lerp(target.left_brow_position, intensity),
            right_brow_position: base
                .right_brow_position
                .lerp(target.right_brow_position, intensity),
            eye_scale: base.eye_scale.lerp(target.eye_scale, intensity),
        }
    }
}

const NEUTRAL: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::ONE,
    mouth_position: Vec3::new(0.0, -0.1, 0.65),
    left_brow_rotation: 0.0,
    right_brow_rotation: 0.0,
    left_brow_position: Vec3::new(-0.2, 0.3, 0.65),
    right_brow_position: Vec3::new(0.2, 0.3, 0.65),
    eye_scale: Vec3::ONE,
};

const HAPPY: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(1.2, 1.2, 1.0),
    mouth_position: Vec3::new(0.0, -0.05, 0.65),
    left_brow_rotation: 0.2,
    right_brow_rotation: -0.2,
    left_brow_position: Vec3::new(-0.2, 0.32, 0.65),
    right_brow_position: Vec3::new(0.2, 0.32, 0.65),
    eye_scale: Vec3::new(1.0, 0.8, 1.0),
};

const SAD: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(0.8, 0.8, 1.0),
    mouth_position: Vec3::new(0.0, -0.15, 0.65),
    left_brow_rotation: -0.3,
    right_brow_rotation: 0.3,
    left_brow_position: Vec3::new(-0.2, 0.28, 0.65),
    right_brow_position: Vec3::new(0.2, 0.28, 0.65),
    eye_scale: Vec3::new(1.0, 0.9, 1.0),
};

const SURPRISED: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(0.8, 1.5, 1.0),
    mouth_position: Vec3::new(0.0, -0.1, 0.65),
    left_brow_rotation: 0.4,
    right_brow_rotation: -0.4,
    left_brow_position: Vec3::new(-0.2, 0.35, 0.65),
    right_brow_position: Vec3::new(0.2, 0.35, 0.65),
    eye_scale: Vec3::new(1.2, 1.2, 1.0),
};

const ANGRY: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(0.9, 0.7, 1.0),
    mouth_position: Vec3::new(0.0, -0.12, 0.65),
    left_brow_rotation: -0.5,
    right_brow_rotation: 0.5,
    left_brow_position: Vec3::new(-0.2, 0.25, 0.65),
    right_brow_position: Vec3::new(0.2, 0.25, 0.65),
    eye_scale: Vec3::new(0.9, 1.1, 1.0),
};

const CONFUSED: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(0.7, 1.0, 1.0),
    mouth_position: Vec3::new(0.05, -0.1, 0.65),
    left_brow_rotation: 0.3,
    right_brow_rotation: -0.1,
    left_brow_position: Vec3::new(-0.2, 0.31, 0.65),
    right_brow_position: Vec3::new(0.2, 0.29, 0.65),
    eye_scale: Vec3::ONE,
};

const EXCITED: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(1.3, 1.3, 1.0),
    mouth_position: Vec3::new(0.0, -0.08, 0.65),
    left_brow_rotation: 0.3,
    right_brow_rotation: -0.3,
    left_brow_position: Vec3::new(-0.2, 0.33, 0.65),
    right_brow_position: Vec3::new(0.2, 0.33, 0.65),
    eye_scale: Vec3::new(1.1, 1.1, 1.0),
};

const SKEPTICAL: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(0.8, 0.9, 1.0),
    mouth_position: Vec3::new(0.05, -0.11, 0.65),
    left_brow_rotation: 0.0,
    right_brow_rotation: 0.4,
    left_brow_position: Vec3::new(-0.2, 0.3, 0.65),
    right_brow_position: Vec3::new(0.2, 0.32, 0.65),
    eye_scale: Vec3::new(0.9, 1.1, 1.0),
};

const SMIRK: ExpressionPose = ExpressionPose {
    mouth_scale: Vec3::new(0.9, 1.1, 1.0),
    mouth_position: Vec3::new(0.08, -0.09, 0.65),
    left_brow_rotation: 0.0,
    right_brow_rotation: -0.2,
    left_brow_position: Vec3::new(-0.2, 0.3, 0.65),
    right_brow_position: Vec3::new(0.2, 0.31, 0.65),
    eye_scale: Vec3::new(1.0, 0.9, 1.0),
};

/// Total lookup: every expression has an authored pose.
pub fn expression_pose(expression: Expression) -> &'static ExpressionPose {
    match expression {
        Expression::Neutral => &NEUTRAL,
        Expression::Happy => &HAPPY,
        Expression::Sad => &SAD,
        Expression::Surprised => &SURPRISED,
        Expression::Angry => &ANGRY,
        Expression::Confused => &CONFUSED,
        Expression::Excited => &EXCITED,
        Expression::Skeptical => &SKEPTICAL,
        Expression::Smirk => &SMIRK,
    }
}
