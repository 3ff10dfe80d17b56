//! Named character states: the closed enums the UI commands and the engine
//! consumes. Wire names are camelCase to match what the browser controls send.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a state name arriving as a string (UI toggle, wasm boundary)
/// does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name {input:?}")]
pub struct ParseStateError {
    pub kind: &'static str,
    pub input: String,
}

impl ParseStateError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

/// Facial expression selected by the UI; each maps to an authored pose.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Expression {
    #[default]
    Neutral,
    Happy,
    Sad,
    Surprised,
    Angry,
    Confused,
    Excited,
    Skeptical,
    Smirk,
}

impl Expression {
    pub const ALL: [Self; 9] = [
        Self::Neutral,
        Self::Happy,
        Self::Sad,
        Self::Surprised,
        Self::Angry,
        Self::Confused,
        Self::Excited,
        Self::Skeptical,
        Self::Smirk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Surprised => "surprised",
            Self::Angry => "angry",
            Self::Confused => "confused",
            Self::Excited => "excited",
            Self::Skeptical => "skeptical",
            Self::Smirk => "smirk",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expression {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(Self::Neutral),
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "surprised" => Ok(Self::Surprised),
            "angry" => Ok(Self::Angry),
            "confused" => Ok(Self::Confused),
            "excited" => Ok(Self::Excited),
            "skeptical" => Ok(Self::Skeptical),
            "smirk" => Ok(Self::Smirk),
            _ => Err(ParseStateError::new("expression", s)),
        }
    }
}

/// Arm gesture; mutually exclusive, held in one shared cell.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Gesture {
    #[default]
    None,
    PointLeft,
    PointRight,
    Stretch,
    ReachFront,
}

impl Gesture {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::PointLeft,
        Self::PointRight,
        Self::Stretch,
        Self::ReachFront,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PointLeft => "pointLeft",
            Self::PointRight => "pointRight",
            Self::Stretch => "stretch",
            Self::ReachFront => "reachFront",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gesture {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "pointLeft" => Ok(Self::PointLeft),
            "pointRight" => Ok(Self::PointRight),
            "stretch" => Ok(Self::Stretch),
            "reachFront" => Ok(Self::ReachFront),
            _ => Err(ParseStateError::new("gesture", s)),
        }
    }
}

/// Where the eyes look; mutually exclusive, held in one shared cell.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum LookDirection {
    #[default]
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

impl LookDirection {
    pub const ALL: [Self; 5] = [
        Self::Center,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for LookDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookDirection {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Self::Center),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParseStateError::new("look direction", s)),
        }
    }
}

/// Whole-body pose; each maps to an authored per-limb pose set.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum BodyPose {
    #[default]
    Standing,
    Walking,
    Running,
    Jumping,
}

impl BodyPose {
    pub const ALL: [Self; 4] = [Self::Standing, Self::Walking, Self::Running, Self::Jumping];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standing => "standing",
            Self::Walking => "walking",
            Self::Running => "running",
            Self::Jumping => "jumping",
        }
    }
}

impl fmt::Display for BodyPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPose {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standing" => Ok(Self::Standing),
            "walking" => Ok(Self::Walking),
            "running" => Ok(Self::Running),
            "jumping" => Ok(Self::Jumping),
            _ => Err(ParseStateError::new("body pose", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_neutral_variants() {
        assert_eq!(Expression::default(), Expression::Neutral);
        assert_eq!(Gesture::default(), Gesture::None);
        assert_eq!(LookDirection::default(), LookDirection::Center);
        assert_eq!(BodyPose::default(), BodyPose::Standing);
    }

    #[test]
    fn name_roundtrips_cover_every_variant() {
        for e in Expression::ALL {
            assert_eq!(e.as_str().parse::<Expression>().unwrap(), e);
        }
        for g in Gesture::ALL {
            assert_eq!(g.as_str().parse::<Gesture>().unwrap(), g);
        }
        for l in LookDirection::ALL {
            assert_eq!(l.as_str().parse::<LookDirection>().unwrap(), l);
        }
        for b in BodyPose::ALL {
            assert_eq!(b.as_str().parse::<BodyPose>().unwrap(), b);
        }
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&Gesture::PointLeft).unwrap(),
            "\"pointLeft\""
        );
        assert_eq!(
            serde_json::from_str::<Gesture>("\"reachFront\"").unwrap(),
            Gesture::ReachFront
        );
        assert_eq!(
            serde_json::to_string(&Expression::Skeptical).unwrap(),
            "\"skeptical\""
        );
    }

    #[test]
    fn unknown_name_is_a_typed_error() {
        let err = "grin".parse::<Expression>().unwrap_err();
        assert_eq!(err.kind, "expression");
        assert_eq!(err.input, "grin");
        assert!(err.to_string().contains("grin"));
    }
}
