//! Piecewise-linear weight transitions.
//!
//! A [`Transition`] is an ordered list of [`TransitionKey`]s. The path starts
//! at whatever weight the channel currently holds (supplied when a
//! [`TransitionPlayer`](crate::player::TransitionPlayer) is created) and then
//! visits each key's target in order, taking `duration` seconds per segment.

use serde::{Deserialize, Serialize};

/// One segment target: reach `target_weight` over `duration` seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionKey {
    pub target_weight: f32,
    pub duration: f32,
}

impl TransitionKey {
    #[inline]
    pub fn new(target_weight: f32, duration: f32) -> Self {
        Self {
            target_weight,
            duration,
        }
    }
}

/// Ordered key sequence. Order is traversal order; keys are never sorted.
///
/// An empty transition is valid; a player built from it finishes immediately.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    keys: Vec<TransitionKey>,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: impl IntoIterator<Item = TransitionKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Discard the current keys and install `keys` in their place.
    ///
    /// The backing allocation is reused, so a transition can be rebuilt every
    /// trigger without reallocating.
    pub fn replace_keys(&mut self, keys: impl IntoIterator<Item = TransitionKey>) {
        self.keys.clear();
        self.keys.extend(keys);
    }

    /// Append a key; returns `self` for chained construction.
    pub fn add_key(&mut self, target_weight: f32, duration: f32) -> &mut Self {
        self.keys.push(TransitionKey::new(target_weight, duration));
        self
    }

    #[inline]
    pub fn keys(&self) -> &[TransitionKey] {
        &self.keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sum of all segment durations.
    pub fn total_duration(&self) -> f32 {
        self.keys.iter().map(|k| k.duration).sum()
    }

    /// Largest target weight along the path (None when empty).
    pub fn peak(&self) -> Option<f32> {
        self.keys
            .iter()
            .map(|k| k.target_weight)
            .fold(None, |acc, w| Some(acc.map_or(w, |a: f32| a.max(w))))
    }

    pub(crate) fn into_keys(self) -> Vec<TransitionKey> {
        self.keys
    }
}

impl FromIterator<TransitionKey> for Transition {
    fn from_iter<I: IntoIterator<Item = TransitionKey>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}
