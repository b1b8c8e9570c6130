use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_expression_core::{
    AutoBlink, BlinkPattern, Clip, ExpressionTrack, ExpressionValues, ExpressionWeights,
    ThreadRandom,
};

fn bench_blink_frames(c: &mut Criterion) {
    c.bench_function("auto_blink_600_frames", |b| {
        b.iter(|| {
            let mut blink = AutoBlink::default();
            let mut sink = ExpressionWeights::new();
            let mut rng = ThreadRandom::seeded(1);
            let dt = 1.0 / 60.0;
            for frame in 0..600 {
                let now = frame as f32 * dt;
                blink.tick(now, true, &sink, &mut rng);
                blink.update(dt, &mut sink);
            }
            black_box(sink.frames())
        })
    });

    c.bench_function("blink_transition_build", |b| {
        let cfg = vizij_expression_core::Config::default();
        b.iter(|| black_box(cfg.blink.transition(BlinkPattern::Full, cfg.modulate_ratio)))
    });
}

fn bench_track_mix(c: &mut Criterion) {
    let clips = (0..64)
        .map(|i| {
            Clip::new(
                ExpressionValues {
                    happy: 1.0,
                    sad: 0.5,
                    ..Default::default()
                },
                i as f32 * 0.5,
                2.0,
            )
        })
        .collect();
    let track = ExpressionTrack::from_clips(clips);
    let weights = vec![0.25f32; 64];

    c.bench_function("track_mix_64_clips", |b| {
        let mut sink = ExpressionWeights::new();
        let mut t = 0.0f32;
        b.iter(|| {
            t = (t + 0.016) % 32.0;
            black_box(track.mix(t, &weights, &mut sink))
        })
    });
}

criterion_group!(benches, bench_blink_frames, bench_track_mix);
criterion_main!(benches);
