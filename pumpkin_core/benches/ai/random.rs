//! `core::ai::random` の性能計測（1手選択）。

use criterion::BatchSize;
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

/// 指定手数だけ進めた盤面と手番を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u8) -> (engine::Board, engine::Mark) {
    let mut agent = ai::random::Agent::new(u64::MIN);
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

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = [board_after_plies(0), board_after_plies(2), board_after_plies(5)];
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, sample) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("board", index);
        group.bench_with_input(bench_id, sample, |bench, &(board, mover)| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(board, mover)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
