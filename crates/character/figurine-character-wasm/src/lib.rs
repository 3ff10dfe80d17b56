//! Browser bindings for the figurine character.
//!
//! The page's UI controls call the setters (writing the reactive cells), the
//! render loop calls `update(elapsed, dt)` once per frame and applies the
//! returned rig snapshot to its meshes.

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use figurine_api_core::{BodyPose, Expression, Gesture, LookDirection, ParseStateError};
use figurine_character_core::{CommandState, Config, Engine};
use figurine_state_core::{AudioPlayback, CharacterState};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn parse_error(e: ParseStateError) -> JsError {
    JsError::new(&e.to_string())
}

fn command_state(state: &CharacterState) -> CommandState {
    CommandState {
        talking: state.is_talking.get(),
        expression: state.expression.get(),
        expression_intensity: state.expression_intensity.get(),
        gesture: state.gesture.get(),
        look: state.look_direction.get(),
        body_pose: state.body_pose.get(),
        body_pose_intensity: state.body_pose_intensity.get(),
    }
}

#[wasm_bindgen]
pub struct FigurineCharacter {
    state: CharacterState,
    engine: Engine,
}

#[wasm_bindgen]
impl FigurineCharacter {
    /// Create a character. Pass a JSON config object or undefined/null for
    /// defaults. Example: `new FigurineCharacter({ walk_speed: 8.0 })`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FigurineCharacter, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(FigurineCharacter {
            state: CharacterState::new(),
            engine: Engine::new(cfg),
        })
    }

    /// Step the animation one frame and return the rig snapshot as a plain
    /// JS object. `elapsed` is total scene time in seconds, `dt` the frame
    /// delta; both come straight from the host's render loop.
    #[wasm_bindgen]
    pub fn update(&mut self, elapsed: f32, dt: f32) -> Result<JsValue, JsError> {
        let cmd = command_state(&self.state);
        self.engine.update(elapsed, dt, &cmd);
        swb::to_value(self.engine.rig()).map_err(|e| JsError::new(&format!("rig error: {e}")))
    }

    // --- plain cell writes -------------------------------------------------

    #[wasm_bindgen(js_name = set_expression)]
    pub fn set_expression(&mut self, name: &str) -> Result<(), JsError> {
        let expression: Expression = name.parse().map_err(parse_error)?;
        self.state.expression.set(expression);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_expression_intensity)]
    pub fn set_expression_intensity(&mut self, intensity: f32) {
        self.state.expression_intensity.set(intensity);
    }

    #[wasm_bindgen(js_name = set_gesture)]
    pub fn set_gesture(&mut self, name: &str) -> Result<(), JsError> {
        let gesture: Gesture = name.parse().map_err(parse_error)?;
        self.state.gesture.set(gesture);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_look_direction)]
    pub fn set_look_direction(&mut self, name: &str) -> Result<(), JsError> {
        let look: LookDirection = name.parse().map_err(parse_error)?;
        self.state.look_direction.set(look);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_body_pose)]
    pub fn set_body_pose(&mut self, name: &str) -> Result<(), JsError> {
        let pose: BodyPose = name.parse().map_err(parse_error)?;
        self.state.body_pose.set(pose);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_body_pose_intensity)]
    pub fn set_body_pose_intensity(&mut self, intensity: f32) {
        self.state.body_pose_intensity.set(intensity);
    }

    #[wasm_bindgen(js_name = set_talking)]
    pub fn set_talking(&mut self, talking: bool) {
        self.state.is_talking.set(talking);
    }

    #[wasm_bindgen(js_name = set_wireframe)]
    pub fn set_wireframe(&mut self, wireframe: bool) {
        self.state.wireframe.set(wireframe);
    }

    /// Mirror of the host audio element, so captions/debug panels can read
    /// progress back; flipping `is_talking` stays the host's responsibility.
    #[wasm_bindgen(js_name = set_audio_playback)]
    pub fn set_audio_playback(&mut self, playing: bool, duration: f32, position: f32) {
        self.state.audio.set(AudioPlayback {
            playing,
            duration,
            position,
        });
    }

    // --- derived toggles (paired UI buttons) -------------------------------

    #[wasm_bindgen(js_name = set_walking)]
    pub fn set_walking(&mut self, active: bool) {
        self.state.walking().set(active);
    }

    #[wasm_bindgen(js_name = toggle_point_left)]
    pub fn toggle_point_left(&mut self, active: bool) {
        self.state.point_left().set(active);
    }

    #[wasm_bindgen(js_name = toggle_point_right)]
    pub fn toggle_point_right(&mut self, active: bool) {
        self.state.point_right().set(active);
    }

    #[wasm_bindgen(js_name = toggle_stretch)]
    pub fn toggle_stretch(&mut self, active: bool) {
        self.state.stretch().set(active);
    }

    #[wasm_bindgen(js_name = toggle_reach_front)]
    pub fn toggle_reach_front(&mut self, active: bool) {
        self.state.reach_front().set(active);
    }

    #[wasm_bindgen(js_name = toggle_look_left)]
    pub fn toggle_look_left(&mut self, active: bool) {
        self.state.look_left().set(active);
    }

    #[wasm_bindgen(js_name = toggle_look_right)]
    pub fn toggle_look_right(&mut self, active: bool) {
        self.state.look_right().set(active);
    }

    #[wasm_bindgen(js_name = toggle_look_top)]
    pub fn toggle_look_top(&mut self, active: bool) {
        self.state.look_top().set(active);
    }

    #[wasm_bindgen(js_name = toggle_look_bottom)]
    pub fn toggle_look_bottom(&mut self, active: bool) {
        self.state.look_bottom().set(active);
    }

    // --- read-backs for UI sync -------------------------------------------

    #[wasm_bindgen(js_name = is_walking)]
    pub fn is_walking(&self) -> bool {
        self.state.walking().get()
    }

    #[wasm_bindgen(js_name = is_talking)]
    pub fn is_talking(&self) -> bool {
        self.state.is_talking.get()
    }

    #[wasm_bindgen]
    pub fn wireframe(&self) -> bool {
        self.state.wireframe.get()
    }

    #[wasm_bindgen]
    pub fn expression(&self) -> String {
        self.state.expression.get().as_str().to_string()
    }

    #[wasm_bindgen]
    pub fn gesture(&self) -> String {
        self.state.gesture.get().as_str().to_string()
    }

    #[wasm_bindgen(js_name = look_direction)]
    pub fn look_direction(&self) -> String {
        self.state.look_direction.get().as_str().to_string()
    }

    #[wasm_bindgen(js_name = body_pose)]
    pub fn body_pose(&self) -> String {
        self.state.body_pose.get().as_str().to_string()
    }

    #[wasm_bindgen(js_name = point_left)]
    pub fn point_left(&self) -> bool {
        self.state.point_left().get()
    }

    #[wasm_bindgen(js_name = point_right)]
    pub fn point_right(&self) -> bool {
        self.state.point_right().get()
    }

    #[wasm_bindgen]
    pub fn stretch(&self) -> bool {
        self.state.stretch().get()
    }

    #[wasm_bindgen(js_name = reach_front)]
    pub fn reach_front(&self) -> bool {
        self.state.reach_front().get()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
