use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::engines::ai_move_selector::AiMoveSelector;
use mailbox_chess::engines::engine_trait::{AiConfig, Difficulty};
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::utils::fen_parser::parse_fen;

const POSITIONS: &[(&str, &str)] = &[
    (
        "start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
];

fn bench_ai_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("ai_select");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    let config = AiConfig {
        seed: Some(1234),
        ..AiConfig::default()
    };

    for (name, fen) in POSITIONS {
        let position = parse_fen(fen).expect("benchmark FEN should parse");
        let state = GameState::from_position(position).expect("benchmark position should be valid");

        for difficulty in Difficulty::ALL {
            let mut selector = AiMoveSelector::new(difficulty, &config);
            group.bench_with_input(
                BenchmarkId::new(difficulty.to_string(), name),
                &state,
                |b, state| {
                    b.iter(|| {
                        let picked = selector
                            .choose_move(black_box(state))
                            .expect("selection should succeed");
                        black_box(picked)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(ai_select_benches, bench_ai_select);
criterion_main!(ai_select_benches);
