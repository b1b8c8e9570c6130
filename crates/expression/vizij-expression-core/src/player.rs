//! Stateful playback of a [`Transition`].
//!
//! The player owns the transition's keys for its whole lifetime. Each call to
//! [`TransitionPlayer::next`] advances the segment clock by the frame delta and
//! returns the interpolated weight for that frame.

use serde::{Deserialize, Serialize};

use crate::interp::{lerp_f32, segment_ratio};
use crate::transition::{Transition, TransitionKey};

/// How the player handles a frame delta that overshoots the current segment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceMode {
    /// At most one segment advance per `next` call. The overshoot is dropped
    /// and the new segment starts from zero elapsed time.
    #[default]
    SingleStep,
    /// Carry the overshoot into following segments, skipping as many as the
    /// delta covers. The transition then ends after exactly the sum of its
    /// durations.
    CatchUp,
}

#[derive(Clone, Debug)]
pub struct TransitionPlayer {
    keys: Vec<TransitionKey>,
    /// Index of the next pending key in `keys`.
    cursor: usize,
    previous: TransitionKey,
    current: TransitionKey,
    elapsed: f32,
    finished: bool,
    mode: AdvanceMode,
}

impl TransitionPlayer {
    /// Start playing `transition` from `starting_weight`.
    pub fn new(transition: Transition, starting_weight: f32) -> Self {
        Self::with_mode(transition, starting_weight, AdvanceMode::default())
    }

    pub fn with_mode(transition: Transition, starting_weight: f32, mode: AdvanceMode) -> Self {
        let keys = transition.into_keys();
        // The start weight acts as a zero-length key preceding the first segment.
        let start = TransitionKey::new(starting_weight, 0.0);
        let (current, cursor, finished) = match keys.first() {
            Some(first) => (*first, 1, false),
            // Nothing to play; reads stay at the starting weight.
            None => (start, 0, true),
        };
        Self {
            keys,
            cursor,
            previous: start,
            current,
            elapsed: 0.0,
            finished,
            mode,
        }
    }

    /// Advance by `dt` seconds and return the weight for this frame.
    ///
    /// Once finished, returns the final target on every call.
    pub fn next(&mut self, dt: f32) -> f32 {
        if self.finished {
            return self.current.target_weight;
        }

        self.elapsed += dt;
        match self.mode {
            AdvanceMode::SingleStep => {
                if self.elapsed > self.current.duration {
                    if !self.advance() {
                        return self.finish();
                    }
                    self.elapsed = 0.0;
                }
            }
            AdvanceMode::CatchUp => {
                while self.elapsed >= self.current.duration {
                    let carry = self.elapsed - self.current.duration;
                    if !self.advance() {
                        return self.finish();
                    }
                    self.elapsed = carry;
                }
            }
        }

        self.sample()
    }

    /// Stop immediately. The current target becomes the stable read value.
    pub fn abort(&mut self) {
        if !self.finished {
            log::trace!(
                "transition aborted at target {}",
                self.current.target_weight
            );
        }
        self.finished = true;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Weight the player would report this frame without advancing time.
    pub fn value(&self) -> f32 {
        if self.finished {
            self.current.target_weight
        } else {
            self.sample()
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn previous_key(&self) -> TransitionKey {
        self.previous
    }

    #[inline]
    pub fn current_key(&self) -> TransitionKey {
        self.current
    }

    /// Keys not yet reached.
    pub fn pending_keys(&self) -> &[TransitionKey] {
        &self.keys[self.cursor..]
    }

    #[inline]
    pub fn mode(&self) -> AdvanceMode {
        self.mode
    }

    fn advance(&mut self) -> bool {
        match self.keys.get(self.cursor) {
            Some(next) => {
                self.previous = self.current;
                self.current = *next;
                self.cursor += 1;
                true
            }
            None => false,
        }
    }

    fn finish(&mut self) -> f32 {
        self.finished = true;
        log::trace!("transition finished at {}", self.current.target_weight);
        self.current.target_weight
    }

    fn sample(&self) -> f32 {
        let ratio = segment_ratio(self.elapsed, self.current.duration);
        lerp_f32(
            self.previous.target_weight,
            self.current.target_weight,
            ratio,
        )
    }
}
