//! The once-per-frame blending step.
//!
//! Layer precedence for the axes they share: walk cycle > gesture > blended
//! pose + idle sway. The talking mouth flap is additive and independent of
//! the rest. This ordering is the one non-obvious piece of control flow in
//! the crate; keep it when editing.

use std::f32::consts::PI;

use crate::body::{body_pose_set, BodyPoseSet};
use crate::config::Config;
use crate::face::{expression_pose, ExpressionPose};
use crate::gesture::gesture_arms;
use crate::inputs::CommandState;
use crate::rig::{Rig, LEFT_EYE_REST, RIGHT_EYE_REST};
use figurine_api_core::{lerp, smooth_factor, BodyPose, Expression, Gesture, LookDirection};

// Walk-cycle amplitudes (radians) for the limbs the cycle drives.
const LEG_SWING: f32 = 0.5;
const ARM_SWING: f32 = 0.25;
const TORSO_ROLL: f32 = 0.05;

/// Per-frame pose blender. Owns the live rig and the previous frame's
/// commanded state for transition-edge detection.
#[derive(Clone, Debug)]
pub struct Engine {
    cfg: Config,
    rig: Rig,
    current_expression: Expression,
    current_gesture: Gesture,
    current_look: LookDirection,
    current_body_pose: BodyPose,
}

impl Engine {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            rig: Rig::rest(),
            current_expression: Expression::Neutral,
            current_gesture: Gesture::None,
            current_look: LookDirection::Center,
            current_body_pose: BodyPose::Standing,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn current_expression(&self) -> Expression {
        self.current_expression
    }

    pub fn current_gesture(&self) -> Gesture {
        self.current_gesture
    }

    pub fn current_look(&self) -> LookDirection {
        self.current_look
    }

    pub fn current_body_pose(&self) -> BodyPose {
        self.current_body_pose
    }

    /// Advance the rig one frame. `elapsed` is total scene time in seconds,
    /// `dt` the time since the previous frame; both come from the host's
    /// render loop.
    pub fn update(&mut self, elapsed: f32, dt: f32, cmd: &CommandState) {
        let factor = smooth_factor(self.cfg.decay_base, dt);

        let face = ExpressionPose::blend(
            expression_pose(Expression::Neutral),
            expression_pose(cmd.expression),
            cmd.expression_intensity,
        );
        // The pose blend is anchored at the previous frame's commanded pose,
        // so intensity shapes the transition, not the steady state.
        let body = BodyPoseSet::blend(
            body_pose_set(self.current_body_pose),
            body_pose_set(cmd.body_pose),
            cmd.body_pose_intensity,
        );

        self.apply_face(&face, factor);
        if cmd.talking {
            self.rig.mouth.scale.y *=
                1.0 + (elapsed * self.cfg.talk_frequency).sin() * self.cfg.talk_amplitude;
        }

        let walking = cmd.body_pose == BodyPose::Walking;
        if !walking {
            self.apply_body(&body, factor);
        }
        self.apply_arm_rotation(cmd, &body, walking, elapsed, factor);
        if walking {
            self.apply_walk_cycle(elapsed);
        } else {
            // Walk release: the bounce eases back to rest instead of snapping.
            self.rig.root_offset_y = lerp(self.rig.root_offset_y, 0.0, factor);
        }
        self.apply_look(cmd.look, factor);

        if self.current_body_pose != cmd.body_pose {
            log::trace!(
                "body pose {} -> {}",
                self.current_body_pose,
                cmd.body_pose
            );
        }
        self.current_expression = cmd.expression;
        self.current_gesture = cmd.gesture;
        self.current_look = cmd.look;
        self.current_body_pose = cmd.body_pose;
    }

    fn apply_face(&mut self, face: &ExpressionPose, factor: f32) {
        let rig = &mut self.rig;
        rig.mouth.scale = rig.mouth.scale.lerp(face.mouth_scale, factor);
        rig.mouth.position = rig.mouth.position.lerp(face.mouth_position, factor);
        rig.left_brow.rotation.z = lerp(rig.left_brow.rotation.z, face.left_brow_rotation, factor);
        rig.right_brow.rotation.z =
            lerp(rig.right_brow.rotation.z, face.right_brow_rotation, factor);
        rig.left_brow.position = rig.left_brow.position.lerp(face.left_brow_position, factor);
        rig.right_brow.position = rig
            .right_brow
            .position
            .lerp(face.right_brow_position, factor);
        rig.left_eye.scale = rig.left_eye.scale.lerp(face.eye_scale, factor);
        rig.right_eye.scale = rig.right_eye.scale.lerp(face.eye_scale, factor);
    }

    /// Ease limbs toward the blended pose. Arm rotation is excluded: it is
    /// resolved separately so gestures and the walk cycle can own it.
    fn apply_body(&mut self, body: &BodyPoseSet, factor: f32) {
        let rig = &mut self.rig;
        rig.left_leg.ease_toward(&body.left_leg, factor);
        rig.right_leg.ease_toward(&body.right_leg, factor);
        rig.torso.ease_toward(&body.torso, factor);

        rig.left_arm.position = rig.left_arm.position.lerp(body.left_arm.position, factor);
        rig.left_arm.scale = rig.left_arm.scale.lerp(body.left_arm.scale, factor);
        rig.right_arm.position = rig.right_arm.position.lerp(body.right_arm.position, factor);
        rig.right_arm.scale = rig.right_arm.scale.lerp(body.right_arm.scale, factor);
    }

    /// Resolve the arm-rotation target: an active gesture wins; otherwise the
    /// blended pose rotation, with the idle sway layered on top only when no
    /// gesture is held and the character is not walking. While walking, the
    /// walk cycle overwrites the x axis afterwards.
    fn apply_arm_rotation(
        &mut self,
        cmd: &CommandState,
        body: &BodyPoseSet,
        walking: bool,
        elapsed: f32,
        factor: f32,
    ) {
        let (left_target, right_target) = if cmd.gesture == Gesture::None {
            (body.left_arm.rotation, body.right_arm.rotation)
        } else {
            let arms = gesture_arms(cmd.gesture);
            (arms.left, arms.right)
        };

        let rig = &mut self.rig;
        rig.left_arm.rotation = rig.left_arm.rotation.lerp(left_target, factor);
        rig.right_arm.rotation = rig.right_arm.rotation.lerp(right_target, factor);

        if cmd.gesture == Gesture::None && !walking {
            let sway = elapsed * self.cfg.sway_frequency;
            rig.left_arm.rotation.x += sway.sin() * self.cfg.sway_amplitude;
            rig.right_arm.rotation.x += (sway + PI).sin() * self.cfg.sway_amplitude;
        }
    }

    /// Procedural walk: legs and arms counter-swing, the torso rolls, and the
    /// whole character bounces. Left/right limbs are exact negations.
    fn apply_walk_cycle(&mut self, elapsed: f32) {
        let phase = elapsed * self.cfg.walk_speed;
        let leg = phase.sin() * LEG_SWING;
        let arm = (phase + PI).sin() * ARM_SWING;

        let rig = &mut self.rig;
        rig.left_leg.rotation.x = leg;
        rig.right_leg.rotation.x = -leg;
        rig.left_arm.rotation.x = arm;
        rig.right_arm.rotation.x = -arm;
        rig.torso.rotation.z = phase.sin() * TORSO_ROLL;
        rig.root_offset_y = (phase * 2.0).sin().abs() * self.cfg.bounce_amplitude;
    }

    fn apply_look(&mut self, look: LookDirection, factor: f32) {
        let shift = self.cfg.eye_shift;
        let mut left = LEFT_EYE_REST;
        let mut right = RIGHT_EYE_REST;
        match look {
            LookDirection::Center => {}
            LookDirection::Left => {
                left.x -= shift;
                right.x -= shift;
            }
            LookDirection::Right => {
                left.x += shift;
                right.x += shift;
            }
            LookDirection::Top => {
                left.y += shift;
                right.y += shift;
            }
            LookDirection::Bottom => {
                left.y -= shift;
                right.y -= shift;
            }
        }
        self.rig.left_eye.position = self.rig.left_eye.position.lerp(left, factor);
        self.rig.right_eye.position = self.rig.right_eye.position.lerp(right, factor);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
