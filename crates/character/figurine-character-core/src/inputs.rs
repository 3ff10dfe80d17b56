//! Frame-input contract for the engine.
//!
//! Adapters snapshot the reactive store into a `CommandState` once per
//! rendered frame and pass it to [`crate::Engine::update`]. The engine never
//! reads the store directly, so embedding hosts without the store crate can
//! drive it from their own state.

use serde::{Deserialize, Serialize};

use figurine_api_core::{BodyPose, Expression, Gesture, LookDirection};

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct CommandState {
    pub talking: bool,
    pub expression: Expression,
    /// Blend weight from neutral toward the target expression. Deliberately
    /// unclamped; values past 1 exaggerate the authored pose.
    pub expression_intensity: f32,
    pub gesture: Gesture,
    pub look: LookDirection,
    pub body_pose: BodyPose,
    /// Blend weight from the previous pose toward the target pose. Unclamped.
    pub body_pose_intensity: f32,
}

impl Default for CommandState {
    fn default() -> Self {
        Self {
            talking: false,
            expression: Expression::Neutral,
            expression_intensity: 1.0,
            gesture: Gesture::None,
            look: LookDirection::Center,
            body_pose: BodyPose::Standing,
            body_pose_intensity: 1.0,
        }
    }
}
