//! Expression channels addressed by the sinks.
//!
//! The preset list mirrors the VRM 1.0 expression presets. Models may carry
//! additional expressions, which are addressed through [`Channel::Custom`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named scalar animation target on the avatar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    Happy,
    Angry,
    Sad,
    Relaxed,
    Surprised,
    Aa,
    Ih,
    Ou,
    Ee,
    Oh,
    #[default]
    Blink,
    BlinkLeft,
    BlinkRight,
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    Neutral,
    /// Model-specific expression addressed by name.
    Custom(String),
}

impl Channel {
    /// Channels written by the clip blender, in write order.
    pub const EMOTIONS: [Channel; 5] = [
        Channel::Happy,
        Channel::Angry,
        Channel::Sad,
        Channel::Relaxed,
        Channel::Surprised,
    ];

    pub fn custom(name: impl Into<String>) -> Self {
        Channel::Custom(name.into())
    }

    /// Preset name as used in VRM files (`blinkLeft`, `happy`, ...).
    pub fn name(&self) -> &str {
        match self {
            Channel::Happy => "happy",
            Channel::Angry => "angry",
            Channel::Sad => "sad",
            Channel::Relaxed => "relaxed",
            Channel::Surprised => "surprised",
            Channel::Aa => "aa",
            Channel::Ih => "ih",
            Channel::Ou => "ou",
            Channel::Ee => "ee",
            Channel::Oh => "oh",
            Channel::Blink => "blink",
            Channel::BlinkLeft => "blinkLeft",
            Channel::BlinkRight => "blinkRight",
            Channel::LookUp => "lookUp",
            Channel::LookDown => "lookDown",
            Channel::LookLeft => "lookLeft",
            Channel::LookRight => "lookRight",
            Channel::Neutral => "neutral",
            Channel::Custom(name) => name.as_str(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Channel::Custom(_))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
