use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use figurine_api_core::{lerp, smooth_factor, BodyPose, Expression, Gesture, LookDirection};
use figurine_character_core::{
    body_pose_set, expression_pose, CommandState, Config, Engine, LEFT_EYE_REST, RIGHT_EYE_REST,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// dt large enough that `1 - 0.001^dt` is exactly 1: the rig lands on its
/// target in a single step.
const SETTLE_DT: f32 = 1000.0;

fn cmd() -> CommandState {
    CommandState::default()
}

/// it should converge the mouth to the authored happy pose at intensity 1
#[test]
fn happy_converges_at_full_intensity() {
    let mut engine = Engine::new(Config::default());
    let command = CommandState {
        expression: Expression::Happy,
        ..cmd()
    };
    engine.update(0.0, SETTLE_DT, &command);

    let happy = expression_pose(Expression::Happy);
    approx(engine.rig().mouth.scale.x, happy.mouth_scale.x, 1e-5);
    approx(engine.rig().mouth.scale.y, happy.mouth_scale.y, 1e-5);
    approx(engine.rig().mouth.position.y, happy.mouth_position.y, 1e-5);
    approx(
        engine.rig().left_brow.rotation.z,
        happy.left_brow_rotation,
        1e-5,
    );
    approx(engine.rig().left_eye.scale.y, happy.eye_scale.y, 1e-5);
    approx(engine.rig().right_eye.scale.y, happy.eye_scale.y, 1e-5);
}

/// it should scale the expression by intensity from the neutral anchor
#[test]
fn expression_intensity_scales_from_neutral() {
    let mut engine = Engine::new(Config::default());
    let command = CommandState {
        expression: Expression::Happy,
        expression_intensity: 0.5,
        ..cmd()
    };
    engine.update(0.0, SETTLE_DT, &command);
    // lerp(1.0, 1.2, 0.5)
    approx(engine.rig().mouth.scale.x, 1.1, 1e-5);
}

/// it should multiply the converged mouth height by 1.2 at the flap peak
#[test]
fn talking_flap_peak_multiplier() {
    let mut engine = Engine::new(Config::default());
    engine.update(0.0, SETTLE_DT, &cmd());
    approx(engine.rig().mouth.scale.y, 1.0, 1e-5);

    // sin(talk_frequency * t) == 1 at t = (pi/2) / 15
    let peak = FRAC_PI_2 / 15.0;
    let command = CommandState {
        talking: true,
        ..cmd()
    };
    engine.update(peak, SETTLE_DT, &command);
    approx(engine.rig().mouth.scale.y, 1.2, 1e-4);
}

/// it should mirror the leg swing exactly while walking
#[test]
fn walk_cycle_legs_are_negations() {
    let mut engine = Engine::new(Config::default());
    let command = CommandState {
        body_pose: BodyPose::Walking,
        ..cmd()
    };
    for i in 0..50 {
        let t = i as f32 * 0.073;
        engine.update(t, 0.016, &command);
        let left = engine.rig().left_leg.rotation.x;
        let right = engine.rig().right_leg.rotation.x;
        assert_eq!(left, -right, "t={t}");
        approx(left, (t * 5.0).sin() * 0.5, 1e-5);
        approx(
            engine.rig().left_arm.rotation.x,
            (t * 5.0 + PI).sin() * 0.25,
            1e-5,
        );
        approx(engine.rig().torso.rotation.z, (t * 5.0).sin() * 0.05, 1e-5);
        approx(
            engine.rig().root_offset_y,
            (t * 10.0).sin().abs() * 0.1,
            1e-5,
        );
    }
}

/// it should skip the pose blend for walk-driven limbs while walking
#[test]
fn walking_overrides_pose_blend() {
    let mut engine = Engine::new(Config::default());
    let command = CommandState {
        body_pose: BodyPose::Walking,
        ..cmd()
    };
    // At phase 0 the procedural torso roll is 0; the authored walking pose
    // would put it at 0.1 if the blend were applied.
    engine.update(0.0, SETTLE_DT, &command);
    approx(engine.rig().torso.rotation.z, 0.0, 1e-6);
    assert_eq!(
        body_pose_set(BodyPose::Walking).torso.rotation.z,
        0.1,
        "authored walking torso roll changed; test premise broken"
    );
}

/// it should ease the bounce back to rest after walking stops, not snap
#[test]
fn walk_release_is_smooth() {
    let mut engine = Engine::new(Config::default());
    let walking = CommandState {
        body_pose: BodyPose::Walking,
        ..cmd()
    };
    // Pick an elapsed time where the bounce is clearly non-zero.
    engine.update(0.3, 0.016, &walking);
    let lifted = engine.rig().root_offset_y;
    assert!(lifted > 1e-3, "bounce expected, got {lifted}");

    let standing = cmd();
    engine.update(0.316, 0.016, &standing);
    let releasing = engine.rig().root_offset_y;
    assert!(releasing > 0.0 && releasing < lifted);
    let factor = smooth_factor(0.001, 0.016);
    approx(releasing, lerp(lifted, 0.0, factor), 1e-6);

    engine.update(1.0, SETTLE_DT, &standing);
    approx(engine.rig().root_offset_y, 0.0, 1e-5);
}

/// it should follow the idle-sway closed form while standing with no gesture
#[test]
fn idle_sway_closed_form() {
    let mut engine = Engine::new(Config::default());
    // Put some rotation on the arms first so the decay term is visible.
    let reach = CommandState {
        gesture: Gesture::ReachFront,
        ..cmd()
    };
    engine.update(0.0, 0.5, &reach);
    let prev_left = engine.rig().left_arm.rotation.x;
    let prev_right = engine.rig().right_arm.rotation.x;
    assert!(prev_left < 0.0);

    let idle = cmd();
    let (t, dt) = (0.7, 0.016);
    engine.update(t, dt, &idle);
    let factor = smooth_factor(0.001, dt);
    approx(
        engine.rig().left_arm.rotation.x,
        lerp(prev_left, 0.0, factor) + (t * 2.0).sin() * 0.015,
        1e-5,
    );
    approx(
        engine.rig().right_arm.rotation.x,
        lerp(prev_right, 0.0, factor) + (t * 2.0 + PI).sin() * 0.015,
        1e-5,
    );
}

/// it should drive arms to the authored gesture targets and back
#[test]
fn gesture_targets_and_release() {
    let mut engine = Engine::new(Config::default());
    let point = CommandState {
        gesture: Gesture::PointLeft,
        ..cmd()
    };
    engine.update(0.0, SETTLE_DT, &point);
    approx(engine.rig().left_arm.rotation.y, FRAC_PI_4, 1e-5);
    approx(engine.rig().left_arm.rotation.z, -FRAC_PI_2, 1e-5);
    // No sway while a gesture is held; the off arm stays at rest.
    approx(engine.rig().right_arm.rotation.x, 0.0, 1e-5);
    approx(engine.rig().right_arm.rotation.z, 0.0, 1e-5);

    // Clearing the gesture returns the arms to the pose rotation (zero for
    // standing); elapsed 0 keeps the sway term out of the picture.
    engine.update(0.0, SETTLE_DT, &cmd());
    approx(engine.rig().left_arm.rotation.y, 0.0, 1e-5);
    approx(engine.rig().left_arm.rotation.z, 0.0, 1e-5);
}

/// it should keep authored arm carriage reachable through the gesture-none path
#[test]
fn pose_arm_rotation_applies_without_gesture() {
    let mut engine = Engine::new(Config::default());
    let running = CommandState {
        body_pose: BodyPose::Running,
        ..cmd()
    };
    engine.update(0.0, SETTLE_DT, &running);
    engine.update(0.0, SETTLE_DT, &running);
    // Arms settle on the running pose rotation, plus the idle sway term
    // (zero at elapsed 0 for the left arm).
    approx(engine.rig().left_arm.rotation.x, 1.0, 1e-4);
    approx(engine.rig().left_leg.rotation.x, -1.0, 1e-4);
}

/// it should blend the body transition from the previous commanded pose
#[test]
fn body_blend_anchors_on_tracker() {
    let mut engine = Engine::new(Config::default());
    let half_jump = CommandState {
        body_pose: BodyPose::Jumping,
        body_pose_intensity: 0.5,
        ..cmd()
    };
    // First frame blends standing -> jumping at 0.5.
    engine.update(0.0, SETTLE_DT, &half_jump);
    approx(engine.rig().torso.rotation.x, -0.1, 1e-5);
    approx(engine.rig().torso.position.y, -0.025, 1e-5);

    // Tracker has caught up; the blend base is now jumping itself.
    engine.update(0.0, SETTLE_DT, &half_jump);
    approx(engine.rig().torso.rotation.x, -0.2, 1e-5);
    approx(engine.rig().torso.position.y, 0.0, 1e-5);
    assert_eq!(engine.current_body_pose(), BodyPose::Jumping);
}

/// it should shift the eyes by the look offset and restore on center
#[test]
fn eye_look_offsets() {
    let mut engine = Engine::new(Config::default());
    let left = CommandState {
        look: LookDirection::Left,
        ..cmd()
    };
    engine.update(0.0, SETTLE_DT, &left);
    approx(engine.rig().left_eye.position.x, LEFT_EYE_REST.x - 0.03, 1e-5);
    approx(
        engine.rig().right_eye.position.x,
        RIGHT_EYE_REST.x - 0.03,
        1e-5,
    );
    approx(engine.rig().left_eye.position.y, LEFT_EYE_REST.y, 1e-5);

    let top = CommandState {
        look: LookDirection::Top,
        ..cmd()
    };
    engine.update(0.0, SETTLE_DT, &top);
    approx(engine.rig().left_eye.position.y, LEFT_EYE_REST.y + 0.03, 1e-5);
    approx(engine.rig().left_eye.position.x, LEFT_EYE_REST.x, 1e-5);

    engine.update(0.0, SETTLE_DT, &cmd());
    approx(engine.rig().left_eye.position.x, LEFT_EYE_REST.x, 1e-5);
    approx(engine.rig().right_eye.position.y, RIGHT_EYE_REST.y, 1e-5);
}

/// it should record the frame's commands in the trackers
#[test]
fn trackers_follow_commands() {
    let mut engine = Engine::new(Config::default());
    let command = CommandState {
        expression: Expression::Smirk,
        gesture: Gesture::Stretch,
        look: LookDirection::Bottom,
        body_pose: BodyPose::Running,
        ..cmd()
    };
    engine.update(0.0, 0.016, &command);
    assert_eq!(engine.current_expression(), Expression::Smirk);
    assert_eq!(engine.current_gesture(), Gesture::Stretch);
    assert_eq!(engine.current_look(), LookDirection::Bottom);
    assert_eq!(engine.current_body_pose(), BodyPose::Running);
}

/// it should round-trip Config through serde and accept partial overrides
#[test]
fn config_serde() {
    let cfg = Config::default();
    let s = serde_json::to_string(&cfg).unwrap();
    let back: Config = serde_json::from_str(&s).unwrap();
    approx(back.decay_base, 0.001, 1e-9);
    approx(back.walk_speed, 5.0, 1e-6);

    let partial: Config = serde_json::from_str(r#"{"walk_speed": 8.0}"#).unwrap();
    approx(partial.walk_speed, 8.0, 1e-6);
    approx(partial.sway_amplitude, 0.015, 1e-9);
}

/// it should start from the rest rig
#[test]
fn engine_starts_at_rest() {
    let engine = Engine::default();
    assert_eq!(engine.rig().mouth.scale.y, 1.0);
    assert_eq!(engine.rig().root_offset_y, 0.0);
    assert_eq!(engine.current_expression(), Expression::Neutral);
    assert_eq!(engine.current_gesture(), Gesture::None);
}
