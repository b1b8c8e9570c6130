//! Randomized blink trigger and the per-frame blink driver.
//!
//! The host drives two clocks:
//! - [`AutoBlink::tick`] with the current time; at random intervals it
//!   evaluates whether to start a blink.
//! - [`AutoBlink::update`] once per rendered frame; it advances the active
//!   blink and writes the weight to the sink.
//!
//! At most one blink is in flight. A new trigger is suppressed while one is
//! playing; the re-evaluation timer keeps running regardless.

use crate::blink::{BlinkParams, BlinkPattern};
use crate::channel::Channel;
use crate::config::Config;
use crate::error::ConfigError;
use crate::player::TransitionPlayer;
use crate::random::RandomSource;
use crate::sink::ChannelSink;

/// Pure trigger decision from two unit draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPolicy {
    pub random_threshold: f32,
    pub partial_blink_probability: f32,
}

impl TriggerPolicy {
    pub fn from_params(params: &BlinkParams) -> Self {
        Self {
            random_threshold: params.random_threshold,
            partial_blink_probability: params.partial_blink_probability,
        }
    }

    /// `trigger_draw` must exceed the threshold to fire; `pattern_draw` below
    /// the partial probability selects a partial blink.
    pub fn decide(&self, trigger_draw: f32, pattern_draw: f32) -> Option<BlinkPattern> {
        if trigger_draw <= self.random_threshold {
            return None;
        }
        if pattern_draw < self.partial_blink_probability {
            Some(BlinkPattern::Partial)
        } else {
            Some(BlinkPattern::Full)
        }
    }
}

#[derive(Clone, Debug)]
pub struct AutoBlink {
    config: Config,
    player: Option<TransitionPlayer>,
    next_fire_time: Option<f32>,
    stopped: bool,
}

impl AutoBlink {
    /// Create a driver for an already validated config.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            player: None,
            next_fire_time: None,
            stopped: false,
        }
    }

    /// Validate `config` and create a driver.
    pub fn try_new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn channel(&self) -> &Channel {
        &self.config.channel
    }

    pub fn policy(&self) -> TriggerPolicy {
        TriggerPolicy::from_params(&self.config.blink)
    }

    /// True while a blink transition is playing.
    pub fn is_blinking(&self) -> bool {
        self.player.as_ref().is_some_and(|p| !p.is_finished())
    }

    pub fn player(&self) -> Option<&TransitionPlayer> {
        self.player.as_ref()
    }

    /// Time of the next trigger evaluation; `None` before the first tick.
    pub fn next_fire_time(&self) -> Option<f32> {
        self.next_fire_time
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run the trigger cycle at host time `now` (seconds).
    ///
    /// Evaluates on the first call and whenever `now` reaches the scheduled
    /// time, then schedules the next evaluation a random interval later.
    /// Returns the pattern of a blink started by this call.
    pub fn tick<S, R>(
        &mut self,
        now: f32,
        enabled: bool,
        sink: &S,
        rng: &mut R,
    ) -> Option<BlinkPattern>
    where
        S: ChannelSink + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.stopped {
            return None;
        }
        if let Some(at) = self.next_fire_time {
            if now < at {
                return None;
            }
        }

        let started = if enabled && !self.is_blinking() {
            let trigger_draw = rng.uniform(0.0, 1.0);
            let pattern_draw = rng.uniform(0.0, 1.0);
            let pattern = self.policy().decide(trigger_draw, pattern_draw);
            if let Some(pattern) = pattern {
                self.start(pattern, sink);
            }
            pattern
        } else {
            log::trace!(
                "auto blink: evaluation skipped (enabled={enabled}, blinking={})",
                self.is_blinking()
            );
            None
        };

        let wait = rng.uniform(self.config.interval_min, self.config.interval_max);
        self.next_fire_time = Some(now + wait);
        started
    }

    /// Start a blink immediately, replacing any blink in flight.
    pub fn blink_now<S>(&mut self, pattern: BlinkPattern, sink: &S)
    where
        S: ChannelSink + ?Sized,
    {
        self.start(pattern, sink);
    }

    /// Advance the active blink by `dt` and write its weight.
    /// Returns the written weight, or `None` when no blink is playing.
    pub fn update<S>(&mut self, dt: f32, sink: &mut S) -> Option<f32>
    where
        S: ChannelSink + ?Sized,
    {
        let player = self.player.as_mut().filter(|p| !p.is_finished())?;
        let weight = player.next(dt);
        sink.set_weight(&self.config.channel, weight);
        if player.is_finished() {
            log::debug!("auto blink: finished on {}", self.config.channel);
        }
        Some(weight)
    }

    /// Cut the active blink short; its current target becomes the final value.
    pub fn abort(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.abort();
        }
    }

    /// Stop all future trigger cycles. A blink already playing still
    /// completes through [`AutoBlink::update`].
    pub fn stop(&mut self) {
        self.stopped = true;
        self.next_fire_time = None;
    }

    fn start<S>(&mut self, pattern: BlinkPattern, sink: &S)
    where
        S: ChannelSink + ?Sized,
    {
        let starting_weight = sink.get_weight(&self.config.channel);
        let transition = self
            .config
            .blink
            .transition(pattern, self.config.modulate_ratio);
        log::debug!(
            "auto blink: starting {:?} blink on {} from {:.3}",
            pattern,
            self.config.channel,
            starting_weight
        );
        self.player = Some(TransitionPlayer::with_mode(
            transition,
            starting_weight,
            self.config.advance,
        ));
    }
}

impl Default for AutoBlink {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
