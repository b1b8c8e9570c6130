//! Blink shapes: parameters and the four-key close/open transition.

use serde::{Deserialize, Serialize};

use crate::transition::{Transition, TransitionKey};

/// Depth factor applied to the half/close ratios for a partial blink.
pub const PARTIAL_BLINK_FACTOR: f32 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlinkPattern {
    Full,
    /// Shallower blink reaching half the full depth.
    Partial,
}

/// Blink shape and trigger probabilities.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkParams {
    /// Weight at the half-closed midpoint, in [0,1].
    pub ratio_half: f32,
    /// Weight at the closed peak, in [0,1].
    pub ratio_close: f32,
    /// Seconds to close (split evenly over two segments).
    pub close_duration: f32,
    /// Seconds to reopen (split evenly over two segments).
    pub open_duration: f32,
    /// A cycle triggers only when its draw exceeds this value.
    pub random_threshold: f32,
    /// Chance that a triggered blink is partial.
    pub partial_blink_probability: f32,
}

impl Default for BlinkParams {
    fn default() -> Self {
        Self {
            ratio_half: 0.3,
            ratio_close: 0.9,
            close_duration: 0.1,
            open_duration: 0.2,
            random_threshold: 0.7,
            partial_blink_probability: 0.2,
        }
    }
}

impl BlinkParams {
    /// Build the transition for `pattern`, scaling every closing weight by `modulate_ratio`.
    pub fn transition(&self, pattern: BlinkPattern, modulate_ratio: f32) -> Transition {
        let mut t = Transition::new();
        self.fill_transition(&mut t, pattern, modulate_ratio);
        t
    }

    /// Rebuild `out` in place for `pattern`, reusing its key storage.
    pub fn fill_transition(&self, out: &mut Transition, pattern: BlinkPattern, modulate_ratio: f32) {
        let (half, close) = match pattern {
            BlinkPattern::Full => (self.ratio_half, self.ratio_close),
            BlinkPattern::Partial => (
                self.ratio_half * PARTIAL_BLINK_FACTOR,
                self.ratio_close * PARTIAL_BLINK_FACTOR,
            ),
        };
        let close_part = self.close_duration / 2.0;
        let open_part = self.open_duration / 2.0;
        out.replace_keys([
            TransitionKey::new(half * modulate_ratio, close_part),
            TransitionKey::new(close * modulate_ratio, close_part),
            TransitionKey::new(half * modulate_ratio, open_part),
            TransitionKey::new(0.0, open_part),
        ]);
    }
}
