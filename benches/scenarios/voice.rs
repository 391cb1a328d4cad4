//! Benchmarks for a complete pad voice.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_pad::graph::node::{GraphNode, RenderCtx};
use saavy_pad::{engine::voice::build_graph, Position, Scale, Timbre};

use crate::BLOCK_SIZES;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");
    let note = saavy_pad::mapper::map_position(Position::new(50.0, 0.0), Scale::Pentatonic);
    let ctx = RenderCtx::from_freq(48_000.0, note.frequency);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // oscillator → filter → gain, once per preset
        for timbre in Timbre::ALL {
            let mut voice = build_graph(&note.voice_spec(timbre));
            voice.effect_mut().set_target(note.volume, 0.1);
            voice.note_on(&ctx);

            group.bench_with_input(BenchmarkId::new(timbre.name(), size), &size, |b, _| {
                b.iter(|| {
                    voice.render_block(black_box(&mut buffer), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}
