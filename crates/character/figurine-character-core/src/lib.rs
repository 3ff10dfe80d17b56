//! Figurine Character Core (engine-agnostic)
//!
//! Authored expression/body-pose tables, the live rig transforms, and the
//! once-per-frame blending step that eases the rig toward the commanded
//! state with procedural walk/sway/talk overlays layered on top. The render
//! loop host drives [`Engine::update`] with `(elapsed, dt)`; this crate has
//! no opinion about the renderer.

pub mod body;
pub mod config;
pub mod engine;
pub mod face;
pub mod gesture;
pub mod inputs;
pub mod rig;

pub use body::{body_pose_set, BodyPoseSet, LimbPose};
pub use config::Config;
pub use engine::Engine;
pub use face::{expression_pose, ExpressionPose};
pub use gesture::{gesture_arms, GestureArms};
pub use inputs::CommandState;
pub use rig::{Rig, Transform, LEFT_EYE_REST, RIGHT_EYE_REST};
