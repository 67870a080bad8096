//! `core::ai::minimax` の性能計測（枝刈りあり/なしの比較）。

use criterion::BenchmarkId;
use criterion::Criterion;
use pumpkin_core::ai::types::Ai as _;
use pumpkin_core::{ai, engine};
use std::hint::black_box;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけランダムに進めた盤面と手番を返す。
fn board_after_plies(plies: u8) -> (engine::Board, engine::Mark) {
    let mut agent = ai::random::Agent::new(u64::MIN.wrapping_add(3));
    let mut game = engine::Game::initial();

    for _ply in u8::MIN..plies {
        let Some(square) = agent.select_move(game.board(), game.side_to_move()) else {
            break;
        };
        match game.play(square) {
            Ok(engine::Outcome::Ongoing) => {}
            Ok(_) | Err(_) => break,
        }
    }

    (game.board(), game.side_to_move())
}

/// `best_moves_with` を設定ごとに計測する。
fn bench_best_moves(criterion: &mut Criterion) {
    let full = ai::SearchConfig::new().with_opening_shortcut(false);
    let configs = [
        ("alphabeta", full),
        ("plain", full.with_alpha_beta(false)),
    ];
    let samples = [board_after_plies(0), board_after_plies(1), board_after_plies(3)];

    let mut group = criterion.benchmark_group("ai/minimax/best_moves");
    group.sample_size(10);

    for (name, config) in configs {
        for (index, &(board, mover)) in samples.iter().enumerate() {
            let bench_id = BenchmarkId::new(name, index);
            group.bench_with_input(bench_id, &config, |bench, &cfg| {
                bench.iter(|| black_box(ai::best_moves_with(&board, mover, cfg)));
            });
        }
    }

    group.finish();
}

/// 1局を最後まで自己対戦させる。
fn bench_self_play(criterion: &mut Criterion) {
    criterion.bench_function("ai/minimax/self_play", |bench| {
        bench.iter(|| {
            let mut game = engine::Game::initial();
            let mut agent = ai::minimax::Agent::new(u64::MIN);
            while let Some(square) = agent.select_move(game.board(), game.side_to_move()) {
                if game.play(square).is_err() {
                    break;
                }
            }
            black_box(game.outcome())
        });
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_best_moves(&mut criterion);
    bench_self_play(&mut criterion);
    criterion.final_summary();
}
