use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Mark, Square};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom as _;

/// 空きマスからランダムに1手を選択するAI。
///
/// `seed` で決定的に再現できる。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: StdRng,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: Board, _mover: Mark) -> Option<Square> {
        if board.evaluate().is_terminal() {
            return None;
        }

        board.available_moves().choose(&mut self.rng).copied()
    }
}
