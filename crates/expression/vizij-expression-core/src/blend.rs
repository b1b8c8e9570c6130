//! Timeline clip blending for the emotion channels.
//!
//! Each active clip contributes `weight * value` per channel. Contributions
//! are summed, not normalized: overlapping clips may push a channel above 1
//! and clamping is left to the sink.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::sink::ChannelSink;

/// Values for the five emotion channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionValues {
    pub happy: f32,
    pub angry: f32,
    pub sad: f32,
    pub relaxed: f32,
    pub surprised: f32,
}

impl ExpressionValues {
    pub fn get(&self, channel: &Channel) -> Option<f32> {
        match channel {
            Channel::Happy => Some(self.happy),
            Channel::Angry => Some(self.angry),
            Channel::Sad => Some(self.sad),
            Channel::Relaxed => Some(self.relaxed),
            Channel::Surprised => Some(self.surprised),
            _ => None,
        }
    }

    /// `self += other * weight`, channel-wise.
    #[inline]
    pub fn add_scaled(&mut self, other: &ExpressionValues, weight: f32) {
        self.happy += other.happy * weight;
        self.angry += other.angry * weight;
        self.sad += other.sad * weight;
        self.relaxed += other.relaxed * weight;
        self.surprised += other.surprised * weight;
    }

    /// Sink writes in [`Channel::EMOTIONS`] order.
    pub fn writes(&self) -> [(Channel, f32); 5] {
        [
            (Channel::Happy, self.happy),
            (Channel::Angry, self.angry),
            (Channel::Sad, self.sad),
            (Channel::Relaxed, self.relaxed),
            (Channel::Surprised, self.surprised),
        ]
    }
}

/// A time-windowed set of emotion targets on the timeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Label shown for the clip on the host's timeline.
    #[serde(default)]
    pub display_name: String,
    pub values: ExpressionValues,
    /// Timeline start in seconds.
    pub start: f32,
    /// Window length in seconds; must be positive for the clip to contribute.
    pub duration: f32,
}

impl Clip {
    pub fn new(values: ExpressionValues, start: f32, duration: f32) -> Self {
        Self {
            display_name: String::new(),
            values,
            start,
            duration,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Normalized position of `time` in the clip window.
    pub fn progress(&self, time: f32) -> f32 {
        (time - self.start) / self.duration
    }

    /// Whether `time` falls inside `[start, start + duration]`.
    pub fn is_active(&self, time: f32) -> bool {
        if self.duration <= 0.0 {
            return false;
        }
        (0.0..=1.0).contains(&self.progress(time))
    }
}

/// Running weighted sum over the clips of one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlendAccumulator {
    sum: ExpressionValues,
    active: usize,
}

impl BlendAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `clip` weighted by `weight` if its window contains `time`.
    /// Returns whether the clip contributed.
    pub fn add(&mut self, clip: &Clip, weight: f32, time: f32) -> bool {
        if !clip.is_active(time) {
            return false;
        }
        self.sum.add_scaled(&clip.values, weight);
        self.active += 1;
        true
    }

    /// Number of clips that contributed so far.
    pub fn active_clips(&self) -> usize {
        self.active
    }

    pub fn finalize(self) -> ExpressionValues {
        self.sum
    }

    /// Sum every `(clip, weight)` pair at `time`.
    ///
    /// `time` must be a finite timeline time; passing anything else is a
    /// caller bug.
    pub fn accumulate<'a, I>(time: f32, clips: I) -> ExpressionValues
    where
        I: IntoIterator<Item = (&'a Clip, f32)>,
    {
        debug_assert!(time.is_finite(), "blend time must be finite, got {time}");
        let mut acc = Self::new();
        for (clip, weight) in clips {
            acc.add(clip, weight, time);
        }
        acc.finalize()
    }
}

/// An ordered list of clips feeding one avatar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpressionTrack {
    clips: Vec<Clip>,
}

impl ExpressionTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clips(clips: Vec<Clip>) -> Self {
        Self { clips }
    }

    /// Append a clip; returns its input index for weighting.
    pub fn add_clip(&mut self, clip: Clip) -> usize {
        self.clips.push(clip);
        self.clips.len() - 1
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.clips.iter().map(|c| c.display_name.as_str())
    }

    /// Blend the clips at `time` with per-clip input `weights`.
    /// Clips without a corresponding weight contribute nothing.
    pub fn evaluate(&self, time: f32, weights: &[f32]) -> ExpressionValues {
        if weights.len() != self.clips.len() {
            log::warn!(
                "expression track: {} weights supplied for {} clips",
                weights.len(),
                self.clips.len()
            );
        }
        BlendAccumulator::accumulate(
            time,
            self.clips
                .iter()
                .enumerate()
                .map(|(i, clip)| (clip, weights.get(i).copied().unwrap_or(0.0))),
        )
    }

    /// Blend at `time` and write the five sums to `sink` as one frame.
    pub fn mix<S>(&self, time: f32, weights: &[f32], sink: &mut S) -> ExpressionValues
    where
        S: ChannelSink + ?Sized,
    {
        let values = self.evaluate(time, weights);
        sink.set_weights(&values.writes());
        values
    }
}
