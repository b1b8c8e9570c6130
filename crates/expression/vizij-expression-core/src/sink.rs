//! Destination for animated expression weights.
//!
//! Hosts implement [`ChannelSink`] over their avatar's expression storage.
//! [`ExpressionWeights`] is a plain in-memory implementation.

use hashbrown::HashMap;

use crate::channel::Channel;

/// Accepts per-channel weight writes and reports the current weight.
pub trait ChannelSink {
    fn set_weight(&mut self, channel: &Channel, value: f32);

    fn get_weight(&self, channel: &Channel) -> f32;

    /// Apply one frame's writes together. Sinks that batch updates override this.
    fn set_weights(&mut self, writes: &[(Channel, f32)]) {
        for (channel, value) in writes {
            self.set_weight(channel, *value);
        }
    }
}

/// In-memory sink. Channels never written read as `0.0`.
#[derive(Clone, Debug, Default)]
pub struct ExpressionWeights {
    weights: HashMap<Channel, f32>,
    frames: u64,
}

impl ExpressionWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, channel: &Channel) -> f32 {
        self.weights.get(channel).copied().unwrap_or(0.0)
    }

    /// Number of batched frame writes received through [`ChannelSink::set_weights`].
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Channel, &f32)> {
        self.weights.iter()
    }

    pub fn clear(&mut self) {
        self.weights.clear();
        self.frames = 0;
    }
}

impl ChannelSink for ExpressionWeights {
    fn set_weight(&mut self, channel: &Channel, value: f32) {
        self.weights.insert(channel.clone(), value);
    }

    fn get_weight(&self, channel: &Channel) -> f32 {
        self.get(channel)
    }

    fn set_weights(&mut self, writes: &[(Channel, f32)]) {
        for (channel, value) in writes {
            self.weights.insert(channel.clone(), *value);
        }
        self.frames += 1;
    }
}
