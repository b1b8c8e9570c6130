//! Vizij Expression Core (engine-agnostic)
//!
//! Runtime math for avatar expression weights:
//! - piecewise-linear [`Transition`]s played back per frame by a [`TransitionPlayer`]
//! - an [`AutoBlink`] driver that starts randomized blinks on its own timer
//! - clip blending ([`ExpressionTrack`], [`BlendAccumulator`]) for timeline-driven emotions
//!
//! Values leave the crate through a host-implemented [`ChannelSink`].

pub mod blend;
pub mod blink;
pub mod channel;
pub mod config;
pub mod error;
pub mod interp;
pub mod player;
pub mod random;
pub mod sink;
pub mod transition;
pub mod trigger;

// Re-exports for consumers (adapters)
pub use blend::{BlendAccumulator, Clip, ExpressionTrack, ExpressionValues};
pub use blink::{BlinkParams, BlinkPattern, PARTIAL_BLINK_FACTOR};
pub use channel::Channel;
pub use config::Config;
pub use error::ConfigError;
pub use player::{AdvanceMode, TransitionPlayer};
pub use random::{RandomSource, ScriptedRandom, ThreadRandom};
pub use sink::{ChannelSink, ExpressionWeights};
pub use transition::{Transition, TransitionKey};
pub use trigger::{AutoBlink, TriggerPolicy};
