use crate::engine::board::Board;
use crate::engine::types::{Mark, Square};

/// 手を選択するAI。
pub trait Ai {
    /// `mover` の手番として、`board` から次の手を選択する。
    ///
    /// 終局している（置けるマスがない、またはすでに勝敗がついている）場合は `None`。
    fn select_move(&mut self, board: Board, mover: Mark) -> Option<Square>;
}
