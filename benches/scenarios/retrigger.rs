//! Benchmarks for a drag across the pad.
//!
//! Every block retriggers: the previous voice is faded and scheduled to stop,
//! a new one starts. With a 0.2s stop delay several release tails overlap,
//! which is the engine's worst steady state.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_pad::{
    engine::{VoiceEngine, VoiceMessage},
    host::VoiceHandle,
    mapper::map_position,
    Position, Scale, Timbre,
};

use crate::BLOCK_SIZES;

pub fn bench_retrigger(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/retrigger");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut engine = VoiceEngine::new(48_000.0, VecDeque::new());
        let mut next_id = 0u64;
        let mut x = 0.0f32;

        group.bench_with_input(BenchmarkId::new("drag", size), &size, |b, _| {
            b.iter(|| {
                let rx = engine.receiver_mut();
                if next_id > 0 {
                    let previous = VoiceHandle::new(next_id);
                    rx.push_back(VoiceMessage::SetGain {
                        voice: previous,
                        target: 0.0,
                        ramp_seconds: 0.1,
                    });
                    rx.push_back(VoiceMessage::Stop {
                        voice: previous,
                        after_seconds: 0.2,
                    });
                }

                x = (x + 3.7) % 100.0;
                next_id += 1;
                let voice = VoiceHandle::new(next_id);
                let note = map_position(Position::new(x, 10.0), Scale::Blues);
                rx.push_back(VoiceMessage::Start {
                    voice,
                    spec: note.voice_spec(Timbre::WarmPad),
                });
                rx.push_back(VoiceMessage::SetGain {
                    voice,
                    target: note.volume,
                    ramp_seconds: 0.1,
                });

                engine.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
