use vizij_expression_core::{
    AutoBlink, BlinkParams, BlinkPattern, Channel, ChannelSink, Config, ConfigError,
    ExpressionWeights, ScriptedRandom, ThreadRandom,
};

fn config_with_threshold(random_threshold: f32) -> Config {
    Config {
        blink: BlinkParams {
            random_threshold,
            ..BlinkParams::default()
        },
        ..Config::default()
    }
}

/// Drive `cycles` trigger evaluations, letting each started blink play out
/// before the next evaluation. Returns how many blinks started.
fn run_cycles(blink: &mut AutoBlink, cycles: usize, rng: &mut ThreadRandom) -> usize {
    let mut sink = ExpressionWeights::new();
    let mut started = 0;
    for _ in 0..cycles {
        let now = blink.next_fire_time().unwrap_or(0.0);
        if blink.tick(now, true, &sink, rng).is_some() {
            started += 1;
        }
        while blink.is_blinking() {
            blink.update(1.0, &mut sink);
        }
    }
    started
}

/// it should never start a blink when the threshold is 1.0
#[test]
fn threshold_one_never_triggers() {
    let mut blink = AutoBlink::new(config_with_threshold(1.0));
    let mut rng = ThreadRandom::seeded(42);
    assert_eq!(run_cycles(&mut blink, 200, &mut rng), 0);
}

/// it should start a blink on (almost) every idle cycle when the threshold is 0.0
#[test]
fn threshold_zero_triggers_every_idle_cycle() {
    let mut blink = AutoBlink::new(config_with_threshold(0.0));
    let mut rng = ThreadRandom::seeded(42);
    let started = run_cycles(&mut blink, 200, &mut rng);
    assert!(started >= 199, "started={started}");
}

/// it should keep re-evaluation intervals within [interval_min, interval_max)
#[test]
fn evaluation_intervals_are_bounded() {
    let mut blink = AutoBlink::default();
    let sink = ExpressionWeights::new();
    let mut rng = ThreadRandom::seeded(7);
    let mut now = 0.0f32;
    for _ in 0..100 {
        blink.tick(now, false, &sink, &mut rng);
        let next = blink.next_fire_time().expect("scheduled");
        let wait = next - now;
        assert!((1.0 - 1e-3..3.0 + 1e-3).contains(&wait), "wait={wait}");
        now = next;
    }
}

/// it should not evaluate before the scheduled time
#[test]
fn tick_before_schedule_draws_nothing() {
    let mut blink = AutoBlink::default();
    let sink = ExpressionWeights::new();
    // disabled evaluation at t=0 draws only the interval: 1.0 + 2.0 * 0.0
    let mut rng = ScriptedRandom::new([0.0]);
    blink.tick(0.0, false, &sink, &mut rng);
    assert_eq!(blink.next_fire_time(), Some(1.0));

    rng.push(0.99);
    assert_eq!(blink.tick(0.5, true, &sink, &mut rng), None);
    assert_eq!(rng.remaining(), 1);
}

/// it should suppress triggers while a blink is still playing
#[test]
fn active_blink_suppresses_new_trigger() {
    let mut blink = AutoBlink::default();
    let sink = ExpressionWeights::new();
    // trigger, pattern, interval | interval
    let mut rng = ScriptedRandom::new([0.9, 0.1, 0.0, 0.5]);
    assert_eq!(
        blink.tick(0.0, true, &sink, &mut rng),
        Some(BlinkPattern::Partial)
    );
    assert_eq!(blink.tick(1.0, true, &sink, &mut rng), None);
    assert!(blink.is_blinking());
    assert_eq!(blink.next_fire_time(), Some(3.0));
    assert_eq!(rng.remaining(), 0);
}

/// it should start from the sink's current weight and write every frame until done
#[test]
fn blink_reads_start_weight_and_writes_sink() {
    let mut blink = AutoBlink::default();
    let mut sink = ExpressionWeights::new();
    sink.set_weight(&Channel::Blink, 0.4);

    blink.blink_now(BlinkPattern::Full, &sink);
    assert_eq!(blink.update(0.0, &mut sink), Some(0.4));

    let mut frames = 0;
    while blink.is_blinking() {
        blink.update(1.0 / 60.0, &mut sink);
        frames += 1;
        assert!(frames < 1000);
    }
    assert_eq!(sink.get(&Channel::Blink), 0.0);
    assert_eq!(blink.update(1.0 / 60.0, &mut sink), None);
}

/// it should write to the configured channel, scaled by modulate_ratio
#[test]
fn custom_channel_and_modulation() {
    let cfg = Config {
        channel: Channel::BlinkLeft,
        modulate_ratio: 2.0,
        ..Config::default()
    };
    let mut blink = AutoBlink::try_new(cfg).expect("valid config");
    let mut sink = ExpressionWeights::new();
    blink.blink_now(BlinkPattern::Full, &sink);

    let mut peak = 0.0f32;
    while blink.is_blinking() {
        if let Some(w) = blink.update(1.0, &mut sink) {
            peak = peak.max(w);
        }
    }
    assert_eq!(peak, 1.8);
    assert_eq!(sink.get(&Channel::Blink), 0.0);
    assert_eq!(sink.get(&Channel::BlinkLeft), 0.0);
}

/// it should hold the current target after abort and stop writing
#[test]
fn abort_ends_blink() {
    let mut blink = AutoBlink::default();
    let mut sink = ExpressionWeights::new();
    blink.blink_now(BlinkPattern::Full, &sink);
    blink.update(0.01, &mut sink);
    blink.abort();
    assert!(!blink.is_blinking());
    assert_eq!(blink.player().map(|p| p.value()), Some(0.3));
    assert_eq!(blink.update(0.01, &mut sink), None);
}

/// it should reject out-of-range parameters at construction
#[test]
fn try_new_validates() {
    let err = AutoBlink::try_new(config_with_threshold(1.5)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "blink.random_threshold",
            ..
        }
    ));
}
