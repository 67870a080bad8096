//! 結合テスト: コンピュータが最善手だけを選ぶ限り負けないことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use pumpkin_core::ai::types::Ai as _;
    use pumpkin_core::{ai, engine};

    /// 探索した終局の集計。
    #[derive(Debug, Default)]
    struct Leaves {
        opponent_wins: u32,
        player_wins: u32,
        ties: u32,
    }

    impl Leaves {
        fn total(&self) -> u32 {
            self.opponent_wins + self.player_wins + self.ties
        }
    }

    /// コンピュータは最善手のすべて、人間は `all_player_moves` なら全合法手、
    /// そうでなければ人間側の最善手のすべてを試して終局まで展開する。
    fn explore(game: engine::Game, all_player_moves: bool, leaves: &mut Leaves) {
        match game.outcome() {
            engine::Outcome::Ongoing => {}
            engine::Outcome::Tie => {
                leaves.ties += 1;
                return;
            }
            engine::Outcome::Win {
                mark: engine::Mark::Opponent,
                ..
            } => {
                leaves.opponent_wins += 1;
                return;
            }
            engine::Outcome::Win { .. } => {
                leaves.player_wins += 1;
                return;
            }
            _ => return,
        }

        let mover = game.side_to_move();
        let candidates = if mover == engine::Mark::Player && all_player_moves {
            game.board().available_moves()
        } else {
            match ai::best_moves(&game.board(), mover) {
                Ok(result) => result.into_moves(),
                Err(err) => panic!("search failed on ongoing board: {err}"),
            }
        };
        assert!(!candidates.is_empty(), "ongoing board must offer a move");

        for square in candidates {
            let mut next = game;
            assert!(next.play(square).is_ok(), "candidate must be playable");
            explore(next, all_player_moves, leaves);
        }
    }

    /// 人間がどう打ってもコンピュータは負けない（先手・後手とも）。
    #[test]
    fn engine_never_loses_against_any_line_of_play() {
        for first in [engine::Mark::Opponent, engine::Mark::Player] {
            let mut leaves = Leaves::default();
            explore(engine::Game::new(first), true, &mut leaves);

            assert_eq!(leaves.player_wins, 0, "first={first:?} leaves={leaves:?}");
            assert!(leaves.opponent_wins > 0, "first={first:?} leaves={leaves:?}");
            assert!(leaves.ties > 0, "first={first:?} leaves={leaves:?}");
        }
    }

    /// 双方が最善手だけを打てば必ず引き分けになる。
    #[test]
    fn perfect_play_on_both_sides_always_ties() {
        for first in [engine::Mark::Opponent, engine::Mark::Player] {
            let mut leaves = Leaves::default();
            explore(engine::Game::new(first), false, &mut leaves);

            assert!(leaves.total() > 0);
            assert_eq!(leaves.ties, leaves.total(), "first={first:?} leaves={leaves:?}");
        }
    }

    /// `random vs minimax` を終局まで進め、結果を返す。
    fn play_random_vs_minimax(seed_player: u64, seed_opponent: u64) -> engine::Outcome {
        let mut game = engine::Game::initial();
        let mut player = ai::random::Agent::new(seed_player);
        let mut opponent = ai::minimax::Agent::new(seed_opponent);

        // 9手で必ず埋まる。
        for _turn in 0..9 {
            if game.is_over() {
                break;
            }

            let board = game.board();
            let mover = game.side_to_move();
            let choice = match mover {
                engine::Mark::Player => player.select_move(board, mover),
                _ => opponent.select_move(board, mover),
            };
            let Some(square) = choice else {
                panic!("agent must move on an ongoing board");
            };

            let played = game.play(square);
            assert!(played.is_ok(), "play must succeed, got={played:?}");
        }

        assert!(game.is_over(), "game did not finish within nine plies");
        game.outcome()
    }

    /// `random vs minimax` で人間側（random）は一度も勝てない。
    #[test]
    fn random_never_beats_minimax() {
        let mut tally = engine::Tally::default();

        for seed in 0_u64..40 {
            let outcome = play_random_vs_minimax(seed, seed.wrapping_mul(31));
            assert_ne!(outcome.winner(), Some(engine::Mark::Player));
            assert!(tally.record(outcome).is_some());
        }

        assert_eq!(tally.wins(), 0);
        assert_eq!(tally.wins() + tally.ties() + tally.losses(), 40);
        assert!(tally.losses() > 0, "minimax should punish random play");
    }
}
