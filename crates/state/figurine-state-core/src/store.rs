//! The full cell set commanding the character, with derived toggles for the
//! mutually-exclusive gesture and look-direction groups.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Toggle};
use figurine_api_core::{BodyPose, Expression, Gesture, LookDirection};

/// Playback progress mirrored from the host audio element. The host flips
/// `is_talking` on start/stop; this cell only carries progress for captions
/// and debug panels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioPlayback {
    pub playing: bool,
    pub duration: f32,
    pub position: f32,
}

/// Every commanded state of the character, one observable cell each.
///
/// Cells are created once with fixed defaults and live for the lifetime of
/// the view. Intensities are intentionally not clamped to [0,1]; values
/// outside the range extrapolate past the authored poses.
#[derive(Debug)]
pub struct CharacterState {
    pub is_talking: Cell<bool>,
    pub expression: Cell<Expression>,
    pub expression_intensity: Cell<f32>,
    pub gesture: Cell<Gesture>,
    pub look_direction: Cell<LookDirection>,
    pub wireframe: Cell<bool>,
    pub body_pose: Cell<BodyPose>,
    pub body_pose_intensity: Cell<f32>,
    pub audio: Cell<AudioPlayback>,
}

impl CharacterState {
    pub fn new() -> Self {
        Self {
            is_talking: Cell::new(false),
            expression: Cell::new(Expression::Neutral),
            expression_intensity: Cell::new(1.0),
            gesture: Cell::new(Gesture::None),
            look_direction: Cell::new(LookDirection::Center),
            wireframe: Cell::new(false),
            body_pose: Cell::new(BodyPose::Standing),
            body_pose_intensity: Cell::new(1.0),
            audio: Cell::new(AudioPlayback::default()),
        }
    }

    fn gesture_toggle(&self, variant: Gesture) -> Toggle<'_, Gesture> {
        Toggle::new(&self.gesture, variant, Gesture::None)
    }

    fn look_toggle(&self, variant: LookDirection) -> Toggle<'_, LookDirection> {
        Toggle::new(&self.look_direction, variant, LookDirection::Center)
    }

    pub fn point_left(&self) -> Toggle<'_, Gesture> {
        self.gesture_toggle(Gesture::PointLeft)
    }

    pub fn point_right(&self) -> Toggle<'_, Gesture> {
        self.gesture_toggle(Gesture::PointRight)
    }

    pub fn stretch(&self) -> Toggle<'_, Gesture> {
        self.gesture_toggle(Gesture::Stretch)
    }

    pub fn reach_front(&self) -> Toggle<'_, Gesture> {
        self.gesture_toggle(Gesture::ReachFront)
    }

    pub fn look_left(&self) -> Toggle<'_, LookDirection> {
        self.look_toggle(LookDirection::Left)
    }

    pub fn look_right(&self) -> Toggle<'_, LookDirection> {
        self.look_toggle(LookDirection::Right)
    }

    pub fn look_top(&self) -> Toggle<'_, LookDirection> {
        self.look_toggle(LookDirection::Top)
    }

    pub fn look_bottom(&self) -> Toggle<'_, LookDirection> {
        self.look_toggle(LookDirection::Bottom)
    }

    /// The walk control is a paired on/off button in the UI; modelled as a
    /// derived toggle over the body-pose cell rather than a second source of
    /// truth.
    pub fn walking(&self) -> Toggle<'_, BodyPose> {
        Toggle::new(&self.body_pose, BodyPose::Walking, BodyPose::Standing)
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new()
    }
}
