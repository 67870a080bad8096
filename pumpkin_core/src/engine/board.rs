use crate::engine::types::{LINES, Line, Mark, Square};
use thiserror::Error;

/// 盤面を評価した結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Outcome {
    /// 進行中。
    Ongoing,
    /// 引き分け（空きマスなし、勝ち筋なし）。
    Tie,
    /// どちらかが3つ並べた。
    Win {
        /// そろえた側の印。
        mark: Mark,
        /// そろった勝ち筋（ハイライト用）。
        line: Line,
    },
}

impl Outcome {
    /// 終局（勝ちまたは引き分け）かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }

    /// 勝者の印を返す（勝ち以外は `None`）。
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Self::Win { mark, .. } => Some(mark),
            Self::Ongoing | Self::Tie => None,
        }
    }
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum PlaceError {
    /// 指定マスはすでに埋まっている。
    #[error("square {index} is already occupied", index = .0.index())]
    InvalidMove(Square),
}

/// 3x3 の盤面。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Board {
    /// 各マスの状態（`None` は空き）。
    cells: [Option<Mark>; Square::COUNT],
}

impl Board {
    /// 全マスの状態から盤面を生成する。
    #[inline]
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; Square::COUNT]) -> Self {
        Self { cells }
    }

    /// 空き盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; Square::COUNT],
        }
    }

    /// 空きマスを昇順で返す。
    #[inline]
    #[must_use]
    pub fn available_moves(self) -> Vec<Square> {
        Square::ALL
            .into_iter()
            .filter(|square| self.cell(*square).is_none())
            .collect()
    }

    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(self, square: Square) -> Option<Mark> {
        self.cells.get(square.slot()).copied().flatten()
    }

    /// 全マスの状態を返す。
    #[inline]
    #[must_use]
    pub const fn cells(self) -> [Option<Mark>; Square::COUNT] {
        self.cells
    }

    /// 指定マスを空きに戻す（探索中の仮着手の取り消し用）。
    #[inline]
    pub(crate) fn clear(&mut self, square: Square) {
        if let Some(slot) = self.cells.get_mut(square.slot()) {
            *slot = None;
        }
    }

    /// `mark` の置かれたマス数を返す。
    #[inline]
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// 空きマス数を返す。
    #[inline]
    #[must_use]
    pub fn empty_count(self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// 盤面を評価する。
    ///
    /// 勝ち筋は `LINES` の順に調べ、最初にそろった筋を返す。
    #[inline]
    #[must_use]
    pub fn evaluate(self) -> Outcome {
        for line in LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.cell(a)
                && self.cell(b) == Some(mark)
                && self.cell(c) == Some(mark)
            {
                return Outcome::Win { mark, line };
            }
        }

        if self.cells.iter().all(Option::is_some) {
            return Outcome::Tie;
        }

        Outcome::Ongoing
    }

    /// 1つも印が置かれていないかを返す。
    #[inline]
    #[must_use]
    pub fn is_blank(self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// 空きマスに印を置く。
    ///
    /// # Errors
    ///
    /// 指定マスが埋まっている場合、`PlaceError::InvalidMove` を返す。
    ///
    #[inline]
    pub fn place(&mut self, square: Square, mark: Mark) -> Result<(), PlaceError> {
        match self.cells.get_mut(square.slot()) {
            Some(slot) if slot.is_none() => {
                *slot = Some(mark);
                Ok(())
            }
            Some(_) | None => Err(PlaceError::InvalidMove(square)),
        }
    }
}
