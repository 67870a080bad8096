use crate::engine::board::{Board, Outcome, PlaceError};
use crate::engine::types::{Mark, Square};
use thiserror::Error;
use tracing::trace;

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("the game is already over")]
    GameOver,
    /// 指定マスが埋まっている。
    #[error(transparent)]
    InvalidMove(#[from] PlaceError),
}

/// 1ゲームの進行を管理する構造体。
///
/// 盤面と手番を保持し、着手のたびに勝敗を評価し直す。
/// 探索エンジンはこの値を持たず、`board()` の写しを受け取るだけ。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 先手。
    first_mover: Mark,
    /// 最後に評価した勝敗。
    outcome: Outcome,
    /// 現手番。
    side_to_move: Mark,
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(self) -> Board {
        self.board
    }

    /// 先手を返す。
    #[inline]
    #[must_use]
    pub const fn first_mover(self) -> Mark {
        self.first_mover
    }

    /// コンピュータ先手でゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self::new(Mark::Opponent)
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        self.outcome.is_terminal()
    }

    /// `first` を先手としてゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn new(first: Mark) -> Self {
        Self {
            board: Board::empty(),
            first_mover: first,
            outcome: Outcome::Ongoing,
            side_to_move: first,
        }
    }

    /// 現在の勝敗を返す。
    #[inline]
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        self.outcome
    }

    /// 現手番の印を `square` に置く。
    ///
    /// 終局していなければ手番を交代する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::InvalidMove`: 指定されたマスが埋まっている場合
    ///
    #[inline]
    pub fn play(&mut self, square: Square) -> Result<Outcome, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }

        let mark = self.side_to_move;
        self.board.place(square, mark)?;
        self.outcome = self.board.evaluate();
        trace!(?mark, square = square.index(), outcome = ?self.outcome, "placed");

        if !self.outcome.is_terminal() {
            self.side_to_move = mark.opponent();
        }

        Ok(self.outcome)
    }

    /// 盤面を空にし、同じ先手で新しいゲームを始める。
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::new(self.first_mover);
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Mark {
        self.side_to_move
    }
}
